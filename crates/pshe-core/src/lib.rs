// Pshe Core Library
// Russian-layout to QWERTY conversion for mistyped git command lines

pub mod convert;
pub mod dispatch;
pub mod layout;
pub mod platform;
pub mod tokenizer;

#[cfg(feature = "cli")]
pub mod settings;

pub use convert::{convert, convert_args};
pub use dispatch::{Dispatch, DispatchError, Dispatcher, Launcher, SystemLauncher, DEFAULT_PROGRAM};
pub use layout::Layout;
pub use platform::{Platform, PlatformError};
pub use tokenizer::{split_args, tokenize, SplitArgs, TokenizeError};

#[cfg(feature = "cli")]
pub use settings::{default_settings_content, Settings, SettingsError};
