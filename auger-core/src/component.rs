mod chain;

/// A pure, deterministic calculation step.
///
/// A `Component` takes an input and produces an output or a typed error.
/// Components must be deterministic: calling one twice with the same
/// input yields the same result, with no hidden state between calls.
///
/// Pipelines are built by chaining components whose output and input
/// types line up, using [`Component::chain()`].
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the component with the given input and returns a result.
    ///
    /// # Errors
    ///
    /// Each component defines its own `Error` type, allowing it to decide
    /// what constitutes a failure within its domain.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Chains this component with another, feeding this component's
    /// output into `next`.
    ///
    /// The two components must share an error type; an error from the
    /// first stage short-circuits the chain.
    ///
    /// # Example
    /// ```
    /// use std::convert::Infallible;
    /// use auger_core::Component;
    ///
    /// /// Converts cubic meters to cubic feet.
    /// struct ToCubicFeet;
    /// impl Component for ToCubicFeet {
    ///     type Input = f64;
    ///     type Output = f64;
    ///     type Error = Infallible;
    ///
    ///     fn call(&self, input: f64) -> Result<f64, Self::Error> {
    ///         Ok(input * 35.3147)
    ///     }
    /// }
    ///
    /// /// Splits a rate evenly across two parallel lines.
    /// struct SplitInTwo;
    /// impl Component for SplitInTwo {
    ///     type Input = f64;
    ///     type Output = f64;
    ///     type Error = Infallible;
    ///
    ///     fn call(&self, input: f64) -> Result<f64, Self::Error> {
    ///         Ok(input / 2.0)
    ///     }
    /// }
    ///
    /// let per_line = ToCubicFeet.chain(SplitInTwo);
    /// assert!((per_line.call(1.0).unwrap() - 17.65735).abs() < 1e-12);
    /// ```
    fn chain<Next>(
        self,
        next: Next,
    ) -> impl Component<Input = Self::Input, Output = Next::Output, Error = Self::Error>
    where
        Self: Sized,
        Next: Component<Input = Self::Output, Error = Self::Error>,
    {
        chain::Chain {
            first: self,
            second: next,
        }
    }
}
