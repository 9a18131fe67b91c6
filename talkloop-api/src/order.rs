use std::str::FromStr;

use crate::Error;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Newest first
    #[default]
    Recent,

    /// Most liked first
    Liked,
}

impl SortOrder {
    pub fn all() -> [SortOrder; 2] {
        [SortOrder::Recent, SortOrder::Liked]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortOrder::Recent => "recent",
            SortOrder::Liked => "liked",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Recent => "Most Recent",
            SortOrder::Liked => "Most Liked",
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<SortOrder, Error> {
        match s {
            "recent" => Ok(SortOrder::Recent),
            "liked" => Ok(SortOrder::Liked),
            _ => Err(Error::UnknownSortOrder(String::from(s))),
        }
    }
}
