use crate::core::evaluator::Evaluator;
use crate::domain::model::Evaluation;
use crate::domain::ports::MarksSource;
use crate::utils::error::Result;

/// One read, classify, report cycle over an injected input source.
pub struct EvaluationSession<S: MarksSource> {
    source: S,
}

impl<S: MarksSource> EvaluationSession<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// A read failure ends the run; no classification is produced.
    pub fn run(&mut self) -> Result<Evaluation> {
        let marks = self.source.read_marks()?;
        tracing::debug!("Read marks: {}", marks);

        let evaluator = Evaluator::new(marks);
        let record = evaluator.record();
        let classification = evaluator.evaluate();
        tracing::info!("✅ Marks {} classified as {}", record.marks(), classification);

        Ok(Evaluation {
            marks: record.marks(),
            classification,
        })
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
