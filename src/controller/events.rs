//! Typed user intents dispatched by the controller

/// A user action, already decoded from whatever widget produced it
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Application start: restore likes and open the selected recipe
    Load,
    SearchSubmitted,
    /// The selected recipe id changed
    HashChanged,
    GoToPage(usize),
    ServingsDecrease,
    ServingsIncrease,
    AddToList,
    ToggleLike,
    DeleteListItem { id: String },
    /// Raw text of a shopping list count input
    ListCountChanged { id: String, value: String },
}
