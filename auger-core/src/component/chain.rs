use crate::Component;

/// Sequential composition of two components.
///
/// Built by [`Component::chain()`]; the first stage's output feeds the
/// second, and a first-stage error is returned without calling the second.
pub(crate) struct Chain<First, Second> {
    pub(crate) first: First,
    pub(crate) second: Second,
}

impl<First, Second> Component for Chain<First, Second>
where
    First: Component,
    Second: Component<Input = First::Output, Error = First::Error>,
{
    type Input = First::Input;
    type Output = Second::Output;
    type Error = First::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let intermediate = self.first.call(input)?;
        self.second.call(intermediate)
    }
}
