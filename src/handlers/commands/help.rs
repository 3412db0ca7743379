//! Help command handler

/// Text shown for `help`
pub const HELP_TEXT: &str = "EventBoard commands\n\n\
    list              - Show all loaded events\n\
    reload            - Fetch events from the server again\n\
    search <text>     - Filter loaded events by name, description or venue\n\
    add               - Create a new event\n\
    edit <id>         - Edit an existing event\n\
    cancel            - Abandon the current edit\n\
    delete <id>       - Delete an event (asks for confirmation)\n\
    show <id>         - Fetch and show a single event\n\
    notifications     - List messages that have not expired yet\n\
    dismiss <n>       - Dismiss notification number n from that list\n\
    quit              - Exit\n\n\
    While filling a form, press Enter to keep the shown value or type '-' to clear it.";

/// Handle `help`
pub fn handle_help() {
    println!("{}", HELP_TEXT);
}
