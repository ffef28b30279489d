#[derive(Clone, Debug)]
pub struct SerializeConfig {
    /// Run validation before serializing and fail on any validation error
    pub validate: bool,

    /// Emit indented JSON from `ChartSpec::to_json_string`
    pub pretty: bool,

    /// Override for the `$schema` URL written to the top-level object
    pub schema: Option<String>,
}

impl Default for SerializeConfig {
    fn default() -> Self {
        Self {
            validate: true,
            pretty: false,
            schema: None,
        }
    }
}
