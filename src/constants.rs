//! # System Constants
//!
//! Wire-level strings shared between the task core and its collaborators:
//! symbolic version markers accepted from stage configuration, control-plane
//! operation paths, and the context keys downstream stages read.

/// Symbolic version markers accepted in the `version` field of a delete input
pub mod markers {
    /// Prefix that distinguishes symbolic markers from literal versions
    pub const SYMBOLIC_PREFIX: char = '$';

    /// Delete the entire function, including the unqualified base resource
    pub const ALL: &str = "$ALL";
    /// Use the explicitly supplied `versionNumber`
    pub const PROVIDED: &str = "$PROVIDED";
    /// The most recently published version
    pub const LATEST: &str = "$LATEST";
    /// The earliest published version still present
    pub const OLDEST: &str = "$OLDEST";
    /// The second most recently published version
    pub const PREVIOUS: &str = "$PREVIOUS";
    /// Every published version older than the `retentionNumber` most recent
    pub const RETAIN: &str = "$RETAIN";

    /// Reserved alias the control plane reports alongside numbered versions;
    /// never a deletable version in its own right.
    pub const RESERVED_ALIAS: &str = "$LATEST";
}

/// Control-plane operation paths
pub mod endpoints {
    pub const CREATE_FUNCTION: &str = "/aws/ops/createLambdaFunction";
    pub const DELETE_FUNCTION: &str = "/aws/ops/deleteLambdaFunction";
}

/// Context and output keys persisted for downstream stages
pub mod context_keys {
    /// Concrete version string the delete task resolved (comma-joined when
    /// multiple versions were targeted)
    pub const DELETE_VERSION: &str = "deleteTask:deleteVersion";
    /// Ordered operation URLs from a multi-version delete
    pub const URL_LIST: &str = "urlList";
    /// Whether the create task issued a create call (`false` = skipped)
    pub const LAMBDA_CREATED: &str = "lambdaCreated";
    /// Revision id of the pre-existing function when creation was skipped
    pub const ORIGINAL_REVISION_ID: &str = "originalRevisionId";
    /// Operation URL of an issued create call
    pub const CREATED_URL: &str = "createdUrl";
    /// Accumulated task error messages
    pub const ERRORS: &str = "errors";
    /// Human-readable completion message for benign no-ops
    pub const MESSAGE: &str = "message";
}

/// Separator used to join multiple resolved versions into one context value.
/// Control-plane version identifiers are numeric strings and never contain
/// this character, so join/split round-trips losslessly.
pub const VERSION_SEPARATOR: char = ',';
