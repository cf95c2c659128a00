use serde::Deserialize;
use serde::Serialize;

/// Plugin configuration supplied by the host.
///
/// There are currently no recognized options. Any keys present in the host's
/// configuration are ignored when deserializing.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct UserConfig {}
