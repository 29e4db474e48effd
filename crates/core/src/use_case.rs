use async_trait::async_trait;
use tracing::debug;

/// A single application operation: one input, one output, one error type.
#[async_trait]
pub trait UseCase<In, Out, Err>: Send + Sync
where
    In: Send + 'static,
    Out: Send + 'static,
    Err: Send + 'static,
{
    async fn execute(&self, input: In) -> Result<Out, Err>;

    /// Name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A use case that checks its input before running.
///
/// `validate` must not touch any collaborator; it only rejects malformed
/// input so that `execute` can assume a well-formed request.
#[async_trait]
pub trait UseCaseValidatable<In, Out, Err>: UseCase<In, Out, Err> + Send + Sync
where
    In: Send + Sync + 'static,
    Out: Send + 'static,
    Err: Send + 'static,
{
    async fn validate(&self, input: &In) -> Result<(), Err>;

    async fn validate_and_execute(&self, input: In) -> Result<Out, Err> {
        if let Err(e) = self.validate(&input).await {
            debug!(use_case = self.name(), "input rejected");
            return Err(e);
        }

        self.execute(input).await
    }
}
