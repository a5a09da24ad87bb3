/// One question and its (possibly still-pending) answer.
///
/// The question is immutable once created; the answer starts empty and
/// is mutated in place, first by the typing indicator and finally by the
/// settlement of the remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

impl Exchange {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: String::new(),
        }
    }
}

/// Ordered history of exchanges in a session.
///
/// Insertion order is chronological order is display order. Entries are
/// never reordered or removed; the pending exchange, when one exists, is
/// always the last entry.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<Exchange>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, exchange: Exchange) {
        self.entries.push(exchange);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Exchange> {
        self.entries.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Exchange> {
        self.entries.last_mut()
    }

    pub fn entries(&self) -> &[Exchange] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_exchange_has_empty_answer() {
        let exchange = Exchange::new("What is 2+2?");
        assert_eq!(exchange.question, "What is 2+2?");
        assert!(exchange.answer.is_empty());
    }

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(Exchange::new("first"));
        transcript.push(Exchange::new("second"));

        let questions: Vec<_> = transcript
            .entries()
            .iter()
            .map(|e| e.question.as_str())
            .collect();
        assert_eq!(questions, vec!["first", "second"]);
    }

    #[test]
    fn test_last_mut_targets_newest_entry() {
        let mut transcript = Transcript::new();
        transcript.push(Exchange::new("first"));
        transcript.push(Exchange::new("second"));

        if let Some(last) = transcript.last_mut() {
            last.answer = "done".to_string();
        }

        assert!(transcript.entries()[0].answer.is_empty());
        assert_eq!(transcript.entries()[1].answer, "done");
    }
}
