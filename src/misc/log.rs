pub mod targets {
    pub const PARSER: &str = "parser";
    pub const BUILDER: &str = "builder";
    pub const CASE_BUILDER: &str = "case builder";
    pub const ABSORBER: &str = "absorber";
}
