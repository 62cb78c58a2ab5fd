//! Default TOML config template with documentation comments.

/// Generate the default TOML config content with comments.
pub(super) fn default_config_toml() -> String {
    r##"# North Light Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[backend]
# base_url = "http://localhost:10000"   # queries go to <base_url>/chat?query=...
# send_json_content_type = true
# timeout_secs = 30                     # 1-600; unset waits indefinitely

[widget]
# title = "Chatty North"
# subtitle = "Always here to help"
# placeholder = "Type your message..."
# greeting = "Hello! How can I help you today?"
# reply = "Thanks for your message! I'm here to help you with any questions you might have."
# reply_delay_ms = 1000                 # 0-60000

[playground]
# title = "North Light AI Playground"
# subtitle = "Intelligent RAG-powered assistant"
# placeholder = "Ask me anything about your website..."
# welcome = "Welcome to North Light AI Playground"
# thinking = "AI is thinking..."

[notifications]
# capacity = 16                         # 1-64
# ttl_secs = 10                         # 1-120

[logging]
# level = "INFO"                        # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
