use thiserror::Error;

pub const THEME_KEY: &str = "portfolio-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim() {
            "light" | "false" => Some(Self::Light),
            "dark" | "true" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }
}

impl From<bool> for Theme {
    fn from(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("local storage rejected the write: {0}")]
    WriteRejected(String),
}

pub trait ThemeStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub trait ThemeMarker {
    fn apply(&mut self, theme: Theme, animate: bool);
}

pub struct PreferenceStore<S, M> {
    storage: S,
    marker: M,
    ambient_prefers_dark: Option<bool>,
    // Last value written this session; survives when storage does not.
    session: Option<Theme>,
}

impl<S: ThemeStorage, M: ThemeMarker> PreferenceStore<S, M> {
    pub fn new(storage: S, marker: M, ambient_prefers_dark: Option<bool>) -> Self {
        Self {
            storage,
            marker,
            ambient_prefers_dark,
            session: None,
        }
    }

    pub fn initialize(&mut self) -> Theme {
        let theme = self.read();
        self.marker.apply(theme, false);
        theme
    }

    pub fn read(&self) -> Theme {
        if let Some(theme) = self.session {
            return theme;
        }

        match self.storage.load(THEME_KEY) {
            Ok(Some(value)) => {
                if let Some(theme) = Theme::from_str(&value) {
                    return theme;
                }
                log::warn!("ignoring unrecognised stored theme {value:?}");
            }
            Ok(None) => {}
            Err(error) => log::debug!("theme storage read failed: {error}"),
        }

        self.ambient_prefers_dark.map(Theme::from).unwrap_or_default()
    }

    pub fn write(&mut self, theme: Theme) {
        self.session = Some(theme);

        if let Err(error) = self.storage.save(THEME_KEY, theme.as_str()) {
            log::warn!("theme preference kept for this session only: {error}");
        }

        self.marker.apply(theme, true);
        log::debug!("theme set to {}", theme.as_str());
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.read().toggled();
        self.write(next);
        next
    }

    pub fn into_parts(self) -> (S, M) {
        (self.storage, self.marker)
    }
}
