/// Search state of the board. Both states render through the same path;
/// the distinction only tells the UI whether a filter is active.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum BoardState {
    #[default]
    Unfiltered,
    Filtered { term: String },
}

impl BoardState {
    /// State implied by the current contents of the search field.
    pub fn from_term(term: &str) -> Self {
        if term.is_empty() {
            BoardState::Unfiltered
        } else {
            BoardState::Filtered { term: term.to_string() }
        }
    }

    pub fn term(&self) -> &str {
        match self {
            BoardState::Unfiltered => "",
            BoardState::Filtered { term } => term,
        }
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self, BoardState::Filtered { .. })
    }
}
