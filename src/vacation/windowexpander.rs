use chrono::NaiveDate;

use crate::time::daterange::DateRange;
use crate::vacation::dayclassifier::DayClassifier;

/// Grows a core vacation window over the adjacent weekends and holidays.
#[derive(Clone, Copy)]
pub struct WindowExpander<'a> {
    classifier: DayClassifier<'a>
}

impl<'a> WindowExpander<'a> {
    pub fn new(classifier: DayClassifier<'a>) -> WindowExpander<'a> {
        WindowExpander { classifier }
    }

    /// Attaches the maximal contiguous run of non-workdays on each side of `core`.
    /// Never skips a workday to reach a farther holiday.
    pub fn expand(&self, core: &DateRange) -> DateRange {
        DateRange::new(self.extend_backward(core.start()), self.extend_forward(core.end()))
    }

    fn extend_backward(&self, start: NaiveDate) -> NaiveDate {
        let mut extended = start;
        while let Some(probe) = extended.pred_opt() {
            if !self.classifier.is_non_workday(probe) {
                break;
            }
            extended = probe;
        }
        extended
    }

    fn extend_forward(&self, end: NaiveDate) -> NaiveDate {
        let mut extended = end;
        while let Some(probe) = extended.succ_opt() {
            if !self.classifier.is_non_workday(probe) {
                break;
            }
            extended = probe;
        }
        extended
    }
}
