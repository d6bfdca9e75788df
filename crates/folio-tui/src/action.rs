/// Everything a key press can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveDown,
    MoveUp,
    GoTop,
    GoBottom,
    /// Advance the category filter: all, then each category in turn.
    CycleFilter,
    /// Back to the "all" filter.
    ResetFilter,
    ToggleSort,
    ToggleTheme,
    ToggleHelp,
    Resize,
    None,
}
