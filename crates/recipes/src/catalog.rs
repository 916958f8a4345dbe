use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::Recipe;

/// On-disk layout of the descriptor file.
#[derive(Deserialize)]
struct Descriptor {
    #[serde(default)]
    recipes: Vec<Recipe>,
}

/// An ordered, validated list of recipes.
///
/// Order is the order of the descriptor file and is what the browser shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Conventional descriptor name, resolved against the working directory.
    pub const FILE_NAME: &'static str = "recipes.json";

    /// Load a catalog from a descriptor file.
    ///
    /// A missing file yields an empty catalog. A file that exists but cannot
    /// be read, parsed or validated is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_json(&content)
    }

    /// Parse and validate a descriptor document.
    pub fn from_json(content: &str) -> Result<Self> {
        let descriptor: Descriptor = serde_json::from_str(content)?;
        Self::new(descriptor.recipes)
    }

    /// Build a catalog from recipes, rejecting empty required fields and
    /// duplicate ids.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let mut seen: HashMap<u32, &str> = HashMap::with_capacity(recipes.len());

        for recipe in &recipes {
            if recipe.name.trim().is_empty() {
                return Err(Error::EmptyField {
                    id: recipe.id,
                    field: "name",
                });
            }
            if recipe.yaml.trim().is_empty() {
                return Err(Error::EmptyField {
                    id: recipe.id,
                    field: "yaml",
                });
            }
            if let Some(first) = seen.insert(recipe.id, &recipe.name) {
                return Err(Error::DuplicateId {
                    id: recipe.id,
                    first: first.to_string(),
                    second: recipe.name.clone(),
                });
            }
        }

        Ok(Self { recipes })
    }

    /// Find a recipe by id
    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Iterate over recipes in descriptor order
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Number of recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True when the catalog has no recipes
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FIVE_RECIPES: &str = r#"{
        "recipes": [
            {"id": 1, "name": "Redis", "yaml": "recipes/redis.yaml", "difficulty": "Beginner", "time": "1 min"},
            {"id": 2, "name": "PostgreSQL", "yaml": "recipes/postgres.yaml"},
            {"id": 3, "name": "MongoDB", "yaml": "recipes/mongo.yaml"},
            {"id": 4, "name": "RabbitMQ", "yaml": "recipes/rabbitmq.yaml"},
            {"id": 5, "name": "WordPress", "yaml": "recipes/wordpress.yaml"}
        ]
    }"#;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::load(&dir.path().join("recipes.json")).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, FIVE_RECIPES).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 5);
        let names: Vec<&str> = catalog.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["Redis", "PostgreSQL", "MongoDB", "RabbitMQ", "WordPress"]
        );
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = Catalog::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::from_json(FIVE_RECIPES).unwrap();
        assert_eq!(catalog.get(1).unwrap().name, "Redis");
        assert_eq!(catalog.get(4).unwrap().name, "RabbitMQ");
        assert!(catalog.get(99).is_none());
        assert!(catalog.get(0).is_none());
    }

    #[test]
    fn test_lookup_with_sparse_ids() {
        let catalog = Catalog::from_json(
            r#"{"recipes": [
                {"id": 10, "name": "Ten", "yaml": "ten.yaml"},
                {"id": 2, "name": "Two", "yaml": "two.yaml"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(catalog.get(10).unwrap().name, "Ten");
        assert_eq!(catalog.get(2).unwrap().name, "Two");
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_missing_recipes_key_is_empty() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::from_json(
            r#"{"recipes": [
                {"id": 1, "name": "Redis", "yaml": "redis.yaml"},
                {"id": 1, "name": "Memcached", "yaml": "memcached.yaml"}
            ]}"#,
        )
        .unwrap_err();

        match err {
            Error::DuplicateId { id, first, second } => {
                assert_eq!(id, 1);
                assert_eq!(first, "Redis");
                assert_eq!(second, "Memcached");
            }
            other => panic!("Expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let err = Catalog::from_json(r#"{"recipes": [{"id": 1, "name": "Redis"}]}"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_empty_yaml_rejected() {
        let err =
            Catalog::from_json(r#"{"recipes": [{"id": 1, "name": "Redis", "yaml": " "}]}"#)
                .unwrap_err();
        assert!(matches!(err, Error::EmptyField { id: 1, field: "yaml" }));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(err.is_invalid_content());
    }
}
