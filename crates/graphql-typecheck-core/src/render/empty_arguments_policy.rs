/// How to annotate a call whose operation declares no variables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyArgumentsPolicy {
    /// Leave the arguments parameter out: `<Result>`.
    Omit,

    /// Write `Record<PropertyKey, never>`, a type that admits no keys.
    #[default]
    Sentinel,
}
