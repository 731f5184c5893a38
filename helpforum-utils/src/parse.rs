use twilight_model::application::interaction::application_command::{
    CommandDataOption, CommandOptionValue,
};

/// Look up a string option by name, ignoring blank values.
pub fn string_option<'a>(options: &'a [CommandDataOption], name: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| match &option.value {
            CommandOptionValue::String(value) => Some(value.trim()),
            _ => None,
        })
        .filter(|value| !value.is_empty())
}
