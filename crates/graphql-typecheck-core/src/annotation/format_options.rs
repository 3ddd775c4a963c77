/// Layout settings for [`LayoutFormatter`](crate::annotation::LayoutFormatter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// The column a line should not run past.
    pub print_width: usize,
    /// Spaces added per level of indentation.
    pub tab_width: usize,
}
impl std::default::Default for FormatOptions {
    fn default() -> Self {
        Self {
            print_width: 80,
            tab_width: 2,
        }
    }
}
