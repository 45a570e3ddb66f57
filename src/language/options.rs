/// Tunables for a formatting call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Precision used when a directive does not specify one.
    pub default_precision: usize,
    /// Extra significant digits added for the fixed notation verbs (`%f`,
    /// `%F`, and the numeric forms of `%v`) so that `%f` of pi at the default
    /// precision gives `3.141593` rather than `3.14159`.
    pub precision_bias: usize,
    /// Append a diagnostic listing arguments that were supplied but never
    /// consumed.
    pub audit: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            default_precision: 6,
            precision_bias: 1,
            audit: true,
        }
    }
}
