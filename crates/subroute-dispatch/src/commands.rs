//! Command registry: factories by path, hidden entries, parent synthesis.

use std::collections::HashSet;
use thiserror::Error;

use crate::command::{Command, CommandFactory, PlaceholderCommand};
use crate::path;
use crate::registry::PrefixRegistry;

/// Failure to turn a command path into a command instance.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No factory is registered under the path.
    #[error("unknown command: {0:?}")]
    Unknown(String),

    /// The factory returned an error.
    #[error("failed to construct command {path:?}: {source}")]
    Construction {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// The full set of routable commands for one CLI.
///
/// Built once from caller-supplied entries. When any path has more than one
/// segment the registry is *nested*: every missing ancestor gets a
/// [`PlaceholderCommand`] so that each level of the tree resolves and can
/// list its children.
pub struct CommandRegistry {
    tree: PrefixRegistry<CommandFactory>,
    hidden: HashSet<String>,
    nested: bool,
}

impl CommandRegistry {
    /// Builds the registry. Paths are trimmed of surrounding whitespace.
    pub fn build<I, K, H, S>(commands: I, hidden: H) -> Self
    where
        I: IntoIterator<Item = (K, CommandFactory)>,
        K: AsRef<str>,
        H: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = PrefixRegistry::new();
        let mut nested = false;
        for (key, factory) in commands {
            let key = key.as_ref().trim();
            if key.contains(path::SEGMENT_SEPARATOR) {
                nested = true;
            }
            tree.insert(key, factory);
        }

        if nested {
            for inserted in tree.fill_ancestors(|_| PlaceholderCommand::factory()) {
                log::debug!("synthesized placeholder for parent command {:?}", inserted);
            }
        }

        let hidden = hidden
            .into_iter()
            .map(|h| h.as_ref().trim().to_string())
            .collect();

        Self {
            tree,
            hidden,
            nested,
        }
    }

    /// Returns true if any registered path has more than one segment.
    pub fn is_nested(&self) -> bool {
        self.nested
    }

    /// Exact lookup of a factory.
    pub fn get(&self, path: &str) -> Option<&CommandFactory> {
        self.tree.get(path)
    }

    /// Returns true if a default command is registered under `""`.
    pub fn has_default(&self) -> bool {
        self.tree.contains("")
    }

    /// Returns true if the path is excluded from help listings.
    pub fn is_hidden(&self, path: &str) -> bool {
        self.hidden.contains(path)
    }

    /// The underlying prefix registry.
    pub fn tree(&self) -> &PrefixRegistry<CommandFactory> {
        &self.tree
    }

    /// Longest registered, non-root path covering whole segments of
    /// `candidate`.
    ///
    /// `"foo"` matches `"foo bar"` but not `"foobar"`.
    pub fn longest_command_prefix(&self, candidate: &str) -> Option<&str> {
        self.tree
            .longest_prefix(candidate)
            .map(|(key, _)| key)
            .filter(|key| !key.is_empty() && path::is_segment_prefix(candidate, key))
    }

    /// Instantiates the command registered under `path`.
    pub fn resolve(&self, path: &str) -> Result<Box<dyn Command>, ResolveError> {
        let factory = self
            .get(path)
            .ok_or_else(|| ResolveError::Unknown(path.to_string()))?;

        factory().map_err(|err| ResolveError::Construction {
            path: path.to_string(),
            source: err.into(),
        })
    }

    /// Visible immediate children of `path`, sorted by full path.
    ///
    /// For the root path these are the top-level commands. The default
    /// command (`""`) is never listed.
    pub fn children(&self, path: &str) -> Vec<(&str, &CommandFactory)> {
        let prefix = if path.is_empty() {
            String::new()
        } else {
            format!("{}{}", path, path::SEGMENT_SEPARATOR)
        };

        self.tree
            .iter_prefix(&prefix)
            .filter(|(key, _)| {
                let rest = &key[prefix.len()..];
                !rest.is_empty() && !rest.contains(path::SEGMENT_SEPARATOR)
            })
            .filter(|(key, _)| !self.is_hidden(key))
            .collect()
    }
}
