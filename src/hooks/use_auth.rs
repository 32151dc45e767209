//! Session hook for the admin area.

use leptos::prelude::*;

use crate::api::SupabaseClient;
use crate::types::AdminUser;

pub const SIGN_IN_INVALID_CREDENTIALS: &str = "Email ou senha incorretos.";
pub const SIGN_IN_EMAIL_NOT_CONFIRMED: &str = "Confirme seu email antes de entrar.";
pub const SIGN_IN_GENERIC_ERROR: &str = "Erro ao fazer login. Tente novamente.";

/// Signals and operations returned by [`use_auth`].
#[derive(Clone)]
pub struct UseAuth {
    /// Current admin identity, `None` when signed out.
    pub user: Signal<Option<AdminUser>>,
    /// `true` only during the initial session check.
    pub loading: Signal<bool>,
    client: SupabaseClient,
}

impl UseAuth {
    /// Attempts a password sign-in. `Ok(())` on success; otherwise one
    /// of the three fixed user-facing messages.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), String> {
        self.client
            .sign_in(email, password)
            .await
            .map_err(|provider_error| map_sign_in_error(&provider_error).to_string())
    }

    /// Fire-and-forget sign-out.
    pub fn sign_out(&self) {
        self.client.sign_out();
    }
}

/// Exposes the current session and subscribes to auth-state changes
/// pushed by the gateway. The subscription is released exactly once
/// when the consuming view is torn down.
pub fn use_auth() -> UseAuth {
    let client = expect_context::<SupabaseClient>();

    let user = RwSignal::new(client.current_user());
    let loading = RwSignal::new(true);

    // One-time session check; the restore itself happened at client
    // construction, so this only resolves the loading gate.
    Effect::new(move |_| {
        loading.set(false);
    });

    let subscription = client.on_auth_state_change(move |session| {
        user.set(session.map(|s| s.user));
    });
    on_cleanup(move || subscription.unsubscribe());

    UseAuth {
        user: user.into(),
        loading: loading.into(),
        client,
    }
}

/// Maps provider error messages onto the three user-facing strings.
/// Unrecognized errors fall through to the generic message.
fn map_sign_in_error(provider_error: &str) -> &'static str {
    if provider_error.contains("Invalid login credentials") {
        SIGN_IN_INVALID_CREDENTIALS
    } else if provider_error.contains("Email not confirmed") {
        SIGN_IN_EMAIL_NOT_CONFIRMED
    } else {
        SIGN_IN_GENERIC_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Invalid login credentials", SIGN_IN_INVALID_CREDENTIALS)]
    #[case(
        "400: Invalid login credentials (grant_type=password)",
        SIGN_IN_INVALID_CREDENTIALS
    )]
    #[case("Email not confirmed", SIGN_IN_EMAIL_NOT_CONFIRMED)]
    #[case("User banned", SIGN_IN_GENERIC_ERROR)]
    #[case("Network error: timeout", SIGN_IN_GENERIC_ERROR)]
    #[case("", SIGN_IN_GENERIC_ERROR)]
    fn provider_errors_map_to_fixed_messages(
        #[case] provider_error: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(map_sign_in_error(provider_error), expected);
    }
}
