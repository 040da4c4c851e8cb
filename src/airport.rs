use std::fmt;
use std::fmt::Formatter;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct Airport {
    pub name: String,
    pub city: String,
}

impl Airport {
    pub fn new(name: &str, city: &str) -> Airport {
        Airport {
            name: name.to_string(),
            city: city.to_string(),
        }
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
