/// One condition attached to a value declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    /// The value is invalid input (`error`); tested in isolation.
    Error,
    /// The value is a special case (`single`); tested in isolation.
    Single,
    /// The value carries property `NAME` (`prop NAME`).
    Prop(String),
    /// The value is only valid when some item elsewhere carries `NAME` (`if NAME`).
    If(String),
    /// The value is invalid whenever some item elsewhere carries `NAME` (`except NAME`).
    Except(String),
}

/// One value declaration within a category: a name plus its conditions, in
/// the order they were written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawValue {
    pub name: String,
    pub conditions: Vec<Condition>,
}

/// One category declaration: a name plus its value declarations, in
/// declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawCategory {
    pub name: String,
    pub values: Vec<RawValue>,
}

/// The parser's output: an ordered list of category declarations, prior to
/// compilation into a [Schema](crate::schema::Schema) and
/// [ExclusionSet](crate::constraints::ExclusionSet).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawSpec {
    pub categories: Vec<RawCategory>,
}
