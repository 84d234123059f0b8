//! # Version Resolver
//!
//! Resolves a symbolic version specifier into the concrete set of versions a
//! delete should target. The specifier is parsed once at the boundary into a
//! closed [`VersionSpecifier`] variant, so resolution is a total match
//! rather than string-prefix dispatch.
//!
//! All "most recent" semantics follow publish order of the cached version
//! list, never lexical or numeric comparison of version strings (version
//! identifiers are not zero-padded).

use crate::constants::{markers, VERSION_SEPARATOR};
use crate::error::{LambdaTaskError, Result};
use crate::model::{FunctionDefinition, LambdaDeleteInput};

/// A version selection rule, decided once from the raw stage input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSpecifier {
    /// A concrete version string named directly
    Literal(String),
    /// Use the caller-supplied `versionNumber`
    Provided,
    /// The most recently published version
    Latest,
    /// The earliest published version still present
    Oldest,
    /// The second most recently published version
    Previous,
    /// Every published version (excluding the reserved alias)
    All,
    /// Every published version older than the `retentionNumber` most recent
    RetainLast,
}

impl VersionSpecifier {
    /// Parse a raw version field. Strings without the symbolic prefix are
    /// literal versions; unrecognized markers yield `None`, which resolves
    /// to [`ResolvedVersions::NotFound`].
    pub fn parse(raw: &str) -> Option<Self> {
        if !raw.starts_with(markers::SYMBOLIC_PREFIX) {
            return Some(VersionSpecifier::Literal(raw.to_string()));
        }
        match raw {
            markers::PROVIDED => Some(VersionSpecifier::Provided),
            markers::LATEST => Some(VersionSpecifier::Latest),
            markers::OLDEST => Some(VersionSpecifier::Oldest),
            markers::PREVIOUS => Some(VersionSpecifier::Previous),
            markers::ALL => Some(VersionSpecifier::All),
            markers::RETAIN => Some(VersionSpecifier::RetainLast),
            _ => None,
        }
    }

    /// Whether resolving this specifier needs the cached function definition
    pub fn requires_cache(&self) -> bool {
        match self {
            VersionSpecifier::Literal(_) | VersionSpecifier::Provided => false,
            VersionSpecifier::Latest
            | VersionSpecifier::Oldest
            | VersionSpecifier::Previous
            | VersionSpecifier::All
            | VersionSpecifier::RetainLast => true,
        }
    }
}

/// Concrete versions produced from a symbolic specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedVersions {
    /// No version could be selected; deleting nothing is an idempotent no-op
    NotFound,
    Single(String),
    /// Ordered oldest-first so pruning removes the correct tail
    Multiple(Vec<String>),
}

/// Resolve a delete input against the cached function state.
///
/// Pure function; precedence, first match wins:
/// 1. absent version field -> `NotFound`
/// 2. literal version -> `Single`, no cache consulted
/// 3. `$PROVIDED` -> `Single(versionNumber)`, no cache consulted; a missing
///    `versionNumber` is a misuse error, never an empty qualifier
/// 4. cache-backed markers -> `NotFound` when the cache has nothing,
///    otherwise a publish-order selection over the published versions
pub fn resolve(
    input: &LambdaDeleteInput,
    cached: Option<&FunctionDefinition>,
) -> Result<ResolvedVersions> {
    let Some(raw) = input.version.as_deref() else {
        return Ok(ResolvedVersions::NotFound);
    };
    let Some(specifier) = VersionSpecifier::parse(raw) else {
        return Ok(ResolvedVersions::NotFound);
    };

    match specifier {
        VersionSpecifier::Literal(version) => Ok(ResolvedVersions::Single(version)),
        VersionSpecifier::Provided => match input.version_number.as_deref() {
            Some(number) if !number.is_empty() => {
                Ok(ResolvedVersions::Single(number.to_string()))
            }
            _ => Err(LambdaTaskError::VersionResolution {
                message: format!(
                    "version marker '{}' requires a versionNumber, but none was supplied",
                    markers::PROVIDED
                ),
            }),
        },
        _ => {
            let Some(definition) = cached else {
                return Ok(ResolvedVersions::NotFound);
            };
            resolve_from_definition(&specifier, input, definition)
        }
    }
}

fn resolve_from_definition(
    specifier: &VersionSpecifier,
    input: &LambdaDeleteInput,
    definition: &FunctionDefinition,
) -> Result<ResolvedVersions> {
    let published: Vec<&str> = definition
        .published_versions()
        .map(|v| v.version.as_str())
        .collect();

    match specifier {
        VersionSpecifier::Latest => Ok(published
            .last()
            .map(|v| ResolvedVersions::Single((*v).to_string()))
            .unwrap_or(ResolvedVersions::NotFound)),
        VersionSpecifier::Oldest => Ok(published
            .first()
            .map(|v| ResolvedVersions::Single((*v).to_string()))
            .unwrap_or(ResolvedVersions::NotFound)),
        VersionSpecifier::Previous => {
            if published.len() < 2 {
                Ok(ResolvedVersions::NotFound)
            } else {
                Ok(ResolvedVersions::Single(
                    published[published.len() - 2].to_string(),
                ))
            }
        }
        VersionSpecifier::All => {
            if published.is_empty() {
                Ok(ResolvedVersions::NotFound)
            } else {
                Ok(ResolvedVersions::Multiple(
                    published.iter().map(|v| (*v).to_string()).collect(),
                ))
            }
        }
        VersionSpecifier::RetainLast => {
            let Some(retain) = input.retention_number else {
                return Err(LambdaTaskError::VersionResolution {
                    message: format!(
                        "version marker '{}' requires a retentionNumber, but none was supplied",
                        markers::RETAIN
                    ),
                });
            };
            if published.len() <= retain {
                return Ok(ResolvedVersions::NotFound);
            }
            Ok(ResolvedVersions::Multiple(
                published[..published.len() - retain]
                    .iter()
                    .map(|v| (*v).to_string())
                    .collect(),
            ))
        }
        // Literal and Provided never reach here
        VersionSpecifier::Literal(_) | VersionSpecifier::Provided => unreachable!(),
    }
}

/// Join resolved versions into the single context value downstream stages
/// read. Round-trips losslessly through [`split_versions`] because version
/// identifiers never contain the separator.
pub fn join_versions(versions: &[String]) -> String {
    versions.join(&VERSION_SEPARATOR.to_string())
}

/// Split a joined version string back into the ordered list
pub fn split_versions(joined: &str) -> Vec<String> {
    joined
        .split(VERSION_SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
