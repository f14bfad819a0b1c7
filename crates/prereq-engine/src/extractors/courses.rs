// Course-mention extraction: explicit `DEPT NUMBER` pairs and numbers whose
// department is inferred from the surrounding sentence
use std::collections::HashSet;

use shared_types::CourseRef;

use crate::extractors::grades::{GradeClause, GradeTags};
use crate::patterns::{
    ends_with_department_code, BARE_NUMBER_PATTERN, EXPLICIT_COURSE_PATTERN,
};
use crate::spans::sentence_spans;
use crate::subjects::{first_subject_in, is_valid_subject};

/// An explicit course mention with a valid department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseMention {
    pub department: String,
    pub number: String,
    /// Byte offset of the department code in the scanned text
    pub position: usize,
}

/// Explicit `DEPT NUMBER` mentions whose department is in the subject table
pub fn explicit_mentions(text: &str) -> impl Iterator<Item = CourseMention> + '_ {
    EXPLICIT_COURSE_PATTERN.captures_iter(text).filter_map(|caps| {
        let department = caps.get(1)?;
        let number = caps.get(2)?;

        if !is_valid_subject(department.as_str()) {
            tracing::trace!(
                department = department.as_str(),
                number = number.as_str(),
                "dropping course mention with unknown subject"
            );
            return None;
        }

        Some(CourseMention {
            department: department.as_str().to_string(),
            number: number.as_str().to_string(),
            position: department.start(),
        })
    })
}

/// Collects course candidates, enforcing one per `(department, number)` and
/// the grade priority: own clause tag, then group grade, then none.
pub struct CourseCollector<'a> {
    tags: &'a GradeTags,
    group: Option<&'a GradeClause>,
    seen: HashSet<(String, String)>,
    courses: Vec<CourseRef>,
}

impl<'a> CourseCollector<'a> {
    pub fn new(tags: &'a GradeTags, group: Option<&'a GradeClause>) -> Self {
        Self {
            tags,
            group,
            seen: HashSet::new(),
            courses: Vec::new(),
        }
    }

    /// Add a candidate unless the pair was already emitted. `group_applies`
    /// says whether the group grade may reach this mention.
    fn push(&mut self, department: &str, number: &str, group_applies: bool) {
        if !self.seen.insert((department.to_string(), number.to_string())) {
            return;
        }

        let min_grade = self
            .tags
            .get(department, number)
            .map(str::to_string)
            .or_else(|| {
                self.group
                    .filter(|_| group_applies)
                    .map(|clause| clause.grade.clone())
            });

        self.courses.push(CourseRef {
            department: department.to_string(),
            number: number.to_string(),
            min_grade,
        });
    }

    /// Explicit pass. A course inherits the group grade only when its first
    /// mention comes before the group clause.
    pub fn collect_explicit(&mut self, text: &str) {
        for mention in explicit_mentions(text) {
            let group_applies = self
                .group
                .is_some_and(|clause| mention.position < clause.position);
            self.push(&mention.department, &mention.number, group_applies);
        }
    }

    /// Implicit pass. Each sentence gets at most one subject (the first table
    /// entry present as a word); bare numbers not already owned by a
    /// `DEPT NUMBER` mention are paired with it. The group grade applies only
    /// when its clause starts after the number and no more than `lookahead`
    /// bytes past the end of the sentence.
    pub fn collect_implicit(&mut self, text: &str, lookahead: usize) {
        for sentence in sentence_spans(text) {
            let sentence_text = sentence.text(text);
            let Some(subject) = first_subject_in(sentence_text) else {
                tracing::trace!(
                    start = sentence.start,
                    "no subject in sentence, skipping implicit courses"
                );
                continue;
            };

            for number in BARE_NUMBER_PATTERN.find_iter(sentence_text) {
                if ends_with_department_code(&sentence_text[..number.start()]) {
                    continue;
                }

                let position = sentence.start + number.start();
                let window_end = sentence.end.saturating_add(lookahead);
                let group_applies = self.group.is_some_and(|clause| {
                    clause.position > position && clause.position <= window_end
                });
                self.push(subject, number.as_str(), group_applies);
            }
        }
    }

    pub fn into_courses(self) -> Vec<CourseRef> {
        self.courses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::grades::{find_group_grade, tag_course_grades};
    use pretty_assertions::assert_eq;

    fn course(department: &str, number: &str, min_grade: Option<&str>) -> CourseRef {
        CourseRef {
            department: department.to_string(),
            number: number.to_string(),
            min_grade: min_grade.map(str::to_string),
        }
    }

    fn run(text: &str, implicit: bool, lookahead: usize) -> Vec<CourseRef> {
        let tags = tag_course_grades(text);
        let group = find_group_grade(text);
        let mut collector = CourseCollector::new(&tags, group.as_ref());
        collector.collect_explicit(text);
        if implicit {
            collector.collect_implicit(text, lookahead);
        }
        collector.into_courses()
    }

    #[test]
    fn test_explicit_mentions_positions() {
        let mentions: Vec<_> = explicit_mentions("Either CMPT 120 or XYZ 130 or MATH 100W").collect();
        assert_eq!(
            mentions,
            vec![
                CourseMention {
                    department: "CMPT".to_string(),
                    number: "120".to_string(),
                    position: 7
                },
                CourseMention {
                    department: "MATH".to_string(),
                    number: "100W".to_string(),
                    position: 30
                },
            ]
        );
    }

    #[test]
    fn test_explicit_dedup_first_occurrence() {
        let courses = run("CMPT 120 or CMPT 120 or CMPT 125", false, 0);
        assert_eq!(courses, vec![course("CMPT", "120", None), course("CMPT", "125", None)]);
    }

    #[test]
    fn test_clause_grade_beats_group_grade() {
        let text = "MATH 151 with a minimum grade of B, CMPT 120, all with a minimum grade of C-.";
        let courses = run(text, false, 0);
        assert_eq!(
            courses,
            vec![course("MATH", "151", Some("B")), course("CMPT", "120", Some("C-"))]
        );
    }

    #[test]
    fn test_group_grade_not_inherited_after_clause() {
        let text = "BIOL 101, BIOL 102, all with a minimum grade of C-. CHEM 100 is also required.";
        let courses = run(text, true, 120);
        assert_eq!(
            courses,
            vec![
                course("BIOL", "101", Some("C-")),
                course("BIOL", "102", Some("C-")),
                course("CHEM", "100", None),
            ]
        );
    }

    #[test]
    fn test_segment_before_first_clause_spans_sentences() {
        let text = "One of CMPT 120 or CMPT 130. MATH 151 and MATH 152; each with a minimum grade of C.";
        let courses = run(text, false, 0);
        assert_eq!(courses.len(), 4);
        assert!(courses.iter().all(|c| c.min_grade.as_deref() == Some("C")));
    }

    #[test]
    fn test_group_grade_only_without_clause_tag() {
        let tags = GradeTags::default();
        let group = GradeClause {
            position: 20,
            grade: "D".to_string(),
        };
        let mut collector = CourseCollector::new(&tags, Some(&group));
        collector.collect_explicit("CMPT 120 or MATH 100 ... ENGL 105W");
        assert_eq!(
            collector.into_courses(),
            vec![
                course("CMPT", "120", Some("D")),
                course("MATH", "100", Some("D")),
                course("ENGL", "105W", None),
            ]
        );
    }

    #[test]
    fn test_implicit_subject_inference() {
        let courses = run("Completion of CMPT 120, 125, and 135. Also PHYS 101.", true, 120);
        assert_eq!(
            courses,
            vec![
                course("CMPT", "120", None),
                course("PHYS", "101", None),
                course("CMPT", "125", None),
                course("CMPT", "135", None),
            ]
        );
    }

    #[test]
    fn test_implicit_requires_subject_in_same_sentence() {
        assert!(run("Take 120 and 125.", true, 120).is_empty());

        let courses = run("CMPT 120. Then 125 and 130.", true, 120);
        assert_eq!(courses, vec![course("CMPT", "120", None)]);
    }

    #[test]
    fn test_implicit_lowercase_subject_word() {
        let courses = run("Any math 100 or 150 course", true, 120);
        assert_eq!(
            courses,
            vec![course("MATH", "100", None), course("MATH", "150", None)]
        );
    }

    #[test]
    fn test_implicit_group_grade_within_sentence() {
        let text = "CMPT 120, 125 and 127, all with a minimum grade of C+.";
        let courses = run(text, true, 120);
        assert_eq!(
            courses,
            vec![
                course("CMPT", "120", Some("C+")),
                course("CMPT", "125", Some("C+")),
                course("CMPT", "127", Some("C+")),
            ]
        );
    }

    #[test]
    fn test_implicit_group_grade_bounded_lookahead() {
        let filler = " Students are strongly advised to consult the program advisor".repeat(4);
        let text = format!(
            "MATH 151 or 150.{filler}. PHYS 120 and PHYS 121, all with a minimum grade of B."
        );

        let narrow = run(&text, true, 20);
        assert_eq!(narrow[0], course("MATH", "151", Some("B")));
        // 150 is inferred in a sentence far from the group clause
        assert_eq!(narrow[3], course("MATH", "150", None));

        let wide = run(&text, true, 10_000);
        assert_eq!(wide[3], course("MATH", "150", Some("B")));
    }
}
