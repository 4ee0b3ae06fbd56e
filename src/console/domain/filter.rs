use crate::schemas::FilterCriteria;

/// Raw filter fields exactly as typed or selected in the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterForm {
    pub status_type: String,
    pub min_reactions: String,
    pub date_from: String,
    pub date_to: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    StatusType,
    MinReactions,
    DateFrom,
    DateTo,
}

impl FilterField {
    pub fn label(&self) -> &'static str {
        match self {
            FilterField::StatusType => "Post Type",
            FilterField::MinReactions => "Min Reactions",
            FilterField::DateFrom => "From Date",
            FilterField::DateTo => "To Date",
        }
    }
}

impl FilterForm {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::StatusType => &self.status_type,
            FilterField::MinReactions => &self.min_reactions,
            FilterField::DateFrom => &self.date_from,
            FilterField::DateTo => &self.date_to,
        }
    }

    pub fn set(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::StatusType => self.status_type = value,
            FilterField::MinReactions => self.min_reactions = value,
            FilterField::DateFrom => self.date_from = value,
            FilterField::DateTo => self.date_to = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub struct FilterBuilder;

impl FilterBuilder {
    /// Keeps only the fields that carry a value, forwarding them as typed.
    /// A minimum-reactions entry keeps its leading integer (`12.5` is 12) and
    /// is dropped, not defaulted to zero, when it has none.
    /// Date order and sign are left for the service to judge.
    pub fn build(form: &FilterForm) -> FilterCriteria {
        FilterCriteria {
            status_type: non_empty(&form.status_type),
            min_reactions: leading_integer(&form.min_reactions),
            date_from: non_empty(&form.date_from),
            date_to: non_empty(&form.date_to),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Optional sign plus the leading digit run, ignoring whatever follows.
fn leading_integer(value: &str) -> Option<i64> {
    let text = value.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - sign_len);
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}
