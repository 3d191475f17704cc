//! Catalog entities as resolved from a search query.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Kind of catalog entity a query is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Artist,
    Album,
    Song,
}

impl EntityKind {
    /// Capitalized label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Artist => "Artist",
            Self::Album => "Album",
            Self::Song => "Song",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Artist => write!(f, "artist"),
            Self::Album => write!(f, "album"),
            Self::Song => write!(f, "song"),
        }
    }
}

impl std::str::FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "artist" => Ok(Self::Artist),
            "album" => Ok(Self::Album),
            "song" | "track" => Ok(Self::Song),
            other => Err(Error::InvalidKind(other.to_string())),
        }
    }
}

/// An immediate child of a resolved entity (an artist's album, an album's track).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildEntity {
    pub id: String,
    pub name: String,
}

/// A canonical catalog entity with its immediate children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    pub kind: EntityKind,
    #[serde(default)]
    pub children: Vec<ChildEntity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,
}

impl Entity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            children: Vec::new(),
            genres: Vec::new(),
            popularity: None,
        }
    }

    /// Builder-style helper to attach a child.
    pub fn with_child(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.children.push(ChildEntity {
            id: id.into(),
            name: name.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("Artist".parse::<EntityKind>().unwrap(), EntityKind::Artist);
        assert_eq!("track".parse::<EntityKind>().unwrap(), EntityKind::Song);
        assert!("playlist".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_entity_serialization_skips_empty_metadata() {
        let entity = Entity::new("AL1", "OK Computer", EntityKind::Album).with_child("T1", "Airbag");
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["kind"], "album");
        assert_eq!(json["children"][0]["name"], "Airbag");
        assert!(json.get("genres").is_none());
        assert!(json.get("popularity").is_none());
    }
}
