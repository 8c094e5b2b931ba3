#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecorationError {
    /// The decoration was attached to a layout strategy that cannot report a
    /// linear orientation.
    NotLinearLayout {
        decoration: &'static str,
        layout: &'static str,
    },
}

impl std::fmt::Display for DecorationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecorationError::NotLinearLayout { decoration, layout } => {
                write!(
                    f,
                    "{decoration} can only be used with a linear layout, got {layout}"
                )
            }
        }
    }
}

impl std::error::Error for DecorationError {}
