//! Search-filter WHERE clause composition for job listings.

use crate::param::ParamList;

/// Optional search predicates for listing jobs.
///
/// Predicates compose with AND. An empty filter imposes no restriction and
/// builds to an empty fragment, letting the caller omit the `WHERE` keyword
/// entirely.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Case-insensitive substring match on the title.
    pub title: Option<String>,
    /// Inclusive lower bound on salary. Zero is a valid explicit bound.
    pub min_salary: Option<i32>,
    /// When true, restrict to strictly positive equity. False imposes no
    /// constraint, same as leaving it unset.
    pub has_equity: bool,
}

impl JobFilter {
    /// Create a filter with no predicates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match titles containing `title`, case-insensitively.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Keep jobs paying at least `min_salary`.
    pub fn min_salary(mut self, min_salary: i32) -> Self {
        self.min_salary = Some(min_salary);
        self
    }

    /// When true, keep only jobs offering equity.
    pub fn has_equity(mut self, has_equity: bool) -> Self {
        self.has_equity = has_equity;
        self
    }

    /// Check if any predicate is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.min_salary.is_none() && !self.has_equity
    }

    /// Build the WHERE fragment (without the keyword) and its parameters.
    ///
    /// Predicates emit in a fixed order so placeholder indices stay stable:
    /// title, then salary, then equity. The equity predicate is a literal
    /// constant and consumes no parameter.
    pub fn build(&self) -> (String, ParamList) {
        let mut params = ParamList::new();
        let mut fragments = Vec::new();

        if let Some(title) = &self.title {
            let idx = params.push(format!("%{title}%"));
            fragments.push(format!("title ILIKE ${idx}"));
        }

        if let Some(min_salary) = self.min_salary {
            let idx = params.push(min_salary);
            fragments.push(format!("salary >= ${idx}"));
        }

        if self.has_equity {
            fragments.push("equity > 0".to_string());
        }

        (fragments.join(" AND "), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_builds_empty_fragment() {
        let (clause, params) = JobFilter::new().build();
        assert_eq!(clause, "");
        assert!(params.is_empty());
        assert!(JobFilter::new().is_empty());
    }

    #[test]
    fn explicit_false_equity_adds_nothing() {
        let filter = JobFilter::new().has_equity(false);
        let (clause, params) = filter.build();
        assert_eq!(clause, "");
        assert!(params.is_empty());
        assert!(filter.is_empty());
    }

    #[test]
    fn zero_min_salary_is_a_real_predicate() {
        let (clause, params) = JobFilter::new().min_salary(0).build();
        assert_eq!(clause, "salary >= $1");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn title_is_wrapped_for_substring_match() {
        let (clause, params) = JobFilter::new().title("eng").build();
        assert_eq!(clause, "title ILIKE $1");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn all_predicates_compose_in_order() {
        let (clause, params) = JobFilter::new()
            .title("eng")
            .min_salary(50_000)
            .has_equity(true)
            .build();

        assert_eq!(clause, "title ILIKE $1 AND salary >= $2 AND equity > 0");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn equity_alone_needs_no_parameters() {
        let (clause, params) = JobFilter::new().has_equity(true).build();
        assert_eq!(clause, "equity > 0");
        assert!(params.is_empty());
    }
}
