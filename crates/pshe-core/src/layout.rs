// Pshe Layout Table
// Maps characters typed on a Russian ЙЦУКЕН layout to the US QWERTY
// characters produced by the same physical keys

use indexmap::IndexMap;

use crate::Platform;

/// Character substitution table from Cyrillic key positions to Latin ones.
///
/// Built fresh for a given [`Platform`]; immutable afterwards. Characters that
/// are not keys of the table are left alone by the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    platform: Platform,
    map: IndexMap<char, char>,
}

/// Letter keys, row by row.
///
/// Plain letters only need their lowercase form; the uppercase entry is
/// derived. The keys that carry brackets and punctuation on the Latin side
/// list their shifted form explicitly since it is not an uppercase letter.
fn letter_entries(platform: Platform) -> Vec<(char, char)> {
    let apple = platform.is_apple();

    vec![
        // Top row
        ('й', 'q'),
        ('ц', 'w'),
        ('у', 'e'),
        ('к', 'r'),
        ('е', 't'),
        ('н', 'y'),
        ('г', 'u'),
        ('ш', 'i'),
        ('щ', 'o'),
        ('з', 'p'),
        ('х', '['),
        ('Х', '{'),
        ('ъ', ']'),
        ('Ъ', '}'),
        // Home row
        ('ф', 'a'),
        ('ы', 's'),
        ('в', 'd'),
        ('а', 'f'),
        ('п', 'g'),
        ('р', 'h'),
        ('о', 'j'),
        ('л', 'k'),
        ('д', 'l'),
        ('ж', ';'),
        ('Ж', ':'),
        ('э', '\''),
        ('Э', '"'),
        // Apple keyboards have ё next to the left shift, where `\` lives
        ('ё', if apple { '\\' } else { '`' }),
        ('Ё', if apple { '|' } else { '~' }),
        // Bottom row
        ('я', 'z'),
        ('ч', 'x'),
        ('с', 'c'),
        ('м', 'v'),
        ('и', 'b'),
        ('т', 'n'),
        ('ь', 'm'),
        ('б', ','),
        ('Б', '<'),
        ('ю', '.'),
        ('Ю', '>'),
    ]
}

/// Punctuation keys. Each platform value is authored independently.
///
/// `]` and `[` come from the QWERTY side: they catch a `` ` `` or `~` that
/// was typed while the Latin layout was already partly active.
fn punctuation_entries(platform: Platform) -> Vec<(char, char)> {
    if platform.is_apple() {
        vec![
            ('.', '&'),
            (',', '^'),
            ('"', '@'),
            ('№', '#'),
            (';', '*'),
            (':', '%'),
            ('?', '?'),
            ('/', '|'),
            ('%', '$'),
            (']', '`'),
            ('[', '~'),
            ('<', '±'),
            ('>', '§'),
        ]
    } else {
        vec![
            ('.', '/'),
            (',', '?'),
            ('"', '@'),
            ('№', '#'),
            (';', '$'),
            (':', '^'),
            ('?', '&'),
            ('/', '/'),
            ('%', '%'),
            (']', '`'),
            ('[', '~'),
            ('<', '<'),
            ('>', '>'),
        ]
    }
}

/// Uppercase a single character, keeping it when the uppercase form would
/// expand to more than one char.
pub(crate) fn upper(c: char) -> char {
    let mut it = c.to_uppercase();
    match (it.next(), it.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl Layout {
    /// Build the table for `platform`
    ///
    /// Every authored `(k, v)` produces `(upper(k), upper(v))` and `(k, v)`,
    /// in authoring order. An explicitly authored shifted entry that comes
    /// later (`Х → {`) therefore replaces the derived one (`Х → [`).
    pub fn for_platform(platform: Platform) -> Self {
        let authored = letter_entries(platform)
            .into_iter()
            .chain(punctuation_entries(platform));

        let map = authored.fold(IndexMap::new(), |mut acc, (key, value)| {
            acc.insert(upper(key), upper(value));
            acc.insert(key, value);
            acc
        });

        log::debug!("built {} layout with {} entries", platform, map.len());

        Self { platform, map }
    }

    /// Build the table for the running platform
    pub fn current() -> Self {
        Self::for_platform(Platform::current())
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Mapped character for `c`, if `c` is in the table
    pub fn get(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.map.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Entries in the order they were first inserted
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.map.iter().map(|(k, v)| (*k, *v))
    }

    /// Convert a string through this table
    pub fn convert(&self, input: &str) -> String {
        crate::convert::convert(self, input)
    }
}
