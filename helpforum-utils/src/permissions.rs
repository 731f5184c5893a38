use twilight_model::{
    gateway::payload::incoming::InteractionCreate,
    id::{Id, marker::RoleMarker},
};

/// Roles of the invoking guild member.
///
/// Empty outside guilds, where nobody can hold the moderator role.
pub fn member_roles(interaction: &InteractionCreate) -> &[Id<RoleMarker>] {
    interaction
        .member
        .as_ref()
        .map(|member| member.roles.as_slice())
        .unwrap_or_default()
}

