// Pshe Pipeline Tests
//
// Full path from raw argv to launcher arguments:
// argv -> join -> layout conversion -> tokenizer -> launcher

use std::io;

use pshe_core::{convert, convert_args, tokenize, Dispatcher, Launcher, Layout, Platform};

#[derive(Default)]
struct Capture {
    program: Option<String>,
    args: Vec<String>,
}

impl Launcher for Capture {
    fn launch(&mut self, program: &str, args: &[String]) -> io::Result<Option<i32>> {
        self.program = Some(program.to_string());
        self.args = args.to_vec();
        Ok(Some(0))
    }
}

fn run(platform: Platform, argv: &[&str]) -> (String, Vec<String>) {
    let mut capture = Capture::default();
    let mut out = Vec::new();
    Dispatcher::new(Layout::for_platform(platform))
        .run(argv, &mut capture, &mut out)
        .unwrap();
    assert_eq!(capture.program.as_deref(), Some("git"));
    (String::from_utf8(out).unwrap(), capture.args)
}

#[test]
fn test_commit_with_message() {
    // Shell already removed the quotes around the message
    let (echo, args) = run(Platform::Linux, &["сщььше", "-ь", "ашч ызудд"]);

    assert_eq!(echo, "> $ git commit -m fix spell\n\n");
    assert_eq!(args, vec!["commit", "-m", "fix", "spell"]);
}

#[test]
fn test_commit_with_quoted_message() {
    // Quotes typed on the Russian layout (Shift+Э) survive the shell
    let (echo, args) = run(Platform::Linux, &["сщььше", "-ф", "-ь", "Эашч ызуддЭ"]);

    assert_eq!(echo, "> $ git commit -a -m \"fix spell\"\n\n");
    assert_eq!(args, vec!["commit", "-a", "-m", "fix spell"]);
}

#[test]
fn test_branch_path_differs_by_platform() {
    let (_, generic) = run(Platform::Linux, &["сруслщге", "ауфегку.ащщ"]);
    let (_, apple) = run(Platform::Darwin, &["сруслщге", "ауфегку.ащщ"]);

    assert_eq!(generic, vec!["checkout", "feature/foo"]);
    assert_eq!(apple, vec!["checkout", "feature&foo"]);
}

#[test]
fn test_latin_arguments_untouched() {
    let (echo, args) = run(Platform::Linux, &["log", "--oneline", "-n", "5"]);

    assert_eq!(echo, "> $ git log --oneline -n 5\n\n");
    assert_eq!(args, vec!["log", "--oneline", "-n", "5"]);
}

#[test]
fn test_layout_converter_tokenizer_compose() {
    let layout = Layout::for_platform(Platform::FreeBsd);
    let converted = convert_args(&layout, &["фвв", "Эь н ашдуЭ"]);

    assert_eq!(converted, convert(&layout, "фвв Эь н ашдуЭ"));
    assert_eq!(converted, "add \"m y file\"");
    assert_eq!(tokenize(&converted), vec!["add", "m y file"]);
}

#[test]
fn test_each_uppercase_letter_has_uppercase_target() {
    for platform in [Platform::Linux, Platform::Darwin] {
        let layout = Layout::for_platform(platform);
        for (from, to) in layout.iter().filter(|(from, _)| from.is_lowercase()) {
            let upper_from = from.to_uppercase().next().unwrap();
            let upper_to = to.to_uppercase().next().unwrap();
            let mapped = layout.get(upper_from).unwrap();
            if to.is_alphabetic() {
                assert_eq!(mapped, upper_to, "{} on {}", from, platform);
            }
        }
    }
}
