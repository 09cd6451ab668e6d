use super::domain::{DomainCode, DomainTemplate, QuestionTemplate};

/// Ordered set of domains presented to one business.
#[derive(Debug, Clone)]
pub struct AssessmentPlan<'a> {
    domains: Vec<&'a DomainTemplate>,
}

impl<'a> AssessmentPlan<'a> {
    pub(crate) fn new(domains: Vec<&'a DomainTemplate>) -> Self {
        Self { domains }
    }

    pub fn domains(&self) -> &[&'a DomainTemplate] {
        &self.domains
    }

    pub fn codes(&self) -> Vec<DomainCode> {
        self.domains.iter().map(|domain| domain.code).collect()
    }

    pub fn contains(&self, code: DomainCode) -> bool {
        self.domains.iter().any(|domain| domain.code == code)
    }

    pub fn questions(
        &self,
    ) -> impl Iterator<Item = (&'a DomainTemplate, &'a QuestionTemplate)> + '_ {
        self.domains.iter().copied().flat_map(|domain| {
            domain
                .questions
                .iter()
                .map(move |question| (domain, question))
        })
    }

    pub fn question_count(&self) -> usize {
        self.domains.iter().map(|domain| domain.questions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }
}
