/// Advisory text shown under the screen area. Cosmetic only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Legend {
    #[default]
    None,
    NoLight,
    PleaseDrag,
    PleaseSelect,
    Custom(String),
}

impl Legend {
    pub fn text(&self) -> &str {
        match self {
            Legend::None => "",
            Legend::NoLight => {
                "There are currently no available lights. Please register them through official application."
            }
            Legend::PleaseDrag => {
                "Drag and drop light from 'available' to 'synced' box to manage it."
            }
            Legend::PleaseSelect => "Select a synced light to manage",
            Legend::Custom(text) => text,
        }
    }

    /// Stock legends by host key (`noLight`, ...); anything else is shown verbatim.
    pub fn parse(message: &str) -> Self {
        match message {
            "" | "none" => Legend::None,
            "noLight" => Legend::NoLight,
            "pleaseDrag" => Legend::PleaseDrag,
            "pleaseSelect" => Legend::PleaseSelect,
            other => Legend::Custom(other.to_string()),
        }
    }
}

impl From<&str> for Legend {
    fn from(message: &str) -> Self {
        Legend::parse(message)
    }
}

impl From<String> for Legend {
    fn from(message: String) -> Self {
        Legend::parse(&message)
    }
}
