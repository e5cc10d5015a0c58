use super::*;

pub(super) fn handle_login_command(store: &LocalStore, token: String) -> Result<()> {
    auth::login(store, &token)?;
    println!("Logged in (token {})", auth::mask_token(&token));
    Ok(())
}

pub(super) fn handle_logout_command(store: &LocalStore) -> Result<()> {
    auth::logout(store)?;
    println!("Logged out");
    Ok(())
}

pub(super) fn handle_token_command(store: &LocalStore, json: bool) -> Result<()> {
    let state = store.read_state()?;
    if json {
        let body = serde_json::json!({
            "present": state.access_token.is_some(),
            "token": state.access_token.as_deref().map(auth::mask_token),
            "saved_at": state.token_saved_at,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).context("serialize token json")?
        );
        return Ok(());
    }
    match state.access_token.as_deref() {
        Some(token) => {
            println!("token: {}", auth::mask_token(token));
            if let Some(saved_at) = &state.token_saved_at {
                println!("saved_at: {saved_at}");
            }
        }
        None => println!("No token stored"),
    }
    Ok(())
}

pub(super) fn handle_remote_command(store: &LocalStore, command: RemoteCommands) -> Result<()> {
    match command {
        RemoteCommands::Set {
            repost_url,
            publish_url,
        } => {
            let mut cfg = store.read_config()?;
            cfg.remote = Some(RemoteConfig {
                repost_url,
                publish_url,
            });
            store.write_config(&cfg)?;
            println!("Remote configured");
        }
        RemoteCommands::Show { json } => {
            let cfg = store.read_config()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cfg.remote).context("serialize remote json")?
                );
            } else {
                match cfg.remote {
                    Some(remote) => {
                        println!("repost_url: {}", remote.repost_url);
                        println!("publish_url: {}", remote.publish_url);
                    }
                    None => println!("No remote configured"),
                }
            }
        }
    }
    Ok(())
}
