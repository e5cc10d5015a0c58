use super::*;

pub(super) fn handle_repost_command(store: &LocalStore, args: RepostArgs) -> Result<()> {
    let remote = require_remote(store)?;
    let client = RemoteClient::new(remote)?;
    let report = run_repost(
        store,
        &client,
        &TermNotifier,
        RepostOptions {
            source_groups: args.source_groups,
            source_users: args.source_users,
            post_count: args.post_count,
            targets: args.targets,
            category: args.category,
        },
    )?;
    print_report(&report, args.json)
}

pub(super) fn handle_publish_command(store: &LocalStore, args: PublishArgs) -> Result<()> {
    let remote = require_remote(store)?;
    let client = RemoteClient::new(remote)?;
    let report = run_publish(
        store,
        &client,
        &TermNotifier,
        PublishOptions {
            groups: args.groups,
            posts: args.posts,
            min_pause: args.min_pause,
            max_pause: args.max_pause,
        },
    )?;
    print_report(&report, args.json)
}

pub(super) fn handle_status_command(store: &LocalStore, json: bool) -> Result<()> {
    let groups = store.load::<Group>();
    let posts = store.load::<Post>();
    let categories = store.load::<Category>();
    let cfg = store.read_config()?;
    let state = store.read_state()?;

    if json {
        let body = serde_json::json!({
            "groups": groups.len(),
            "posts": posts.len(),
            "categories": categories.len(),
            "token": state.access_token.as_deref().map(auth::mask_token),
            "remote": cfg.remote,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).context("serialize status json")?
        );
        return Ok(());
    }

    println!("groups: {}", groups.len());
    println!("posts: {}", posts.len());
    println!("categories: {}", categories.len());
    match state.access_token.as_deref() {
        Some(token) => println!("token: {}", auth::mask_token(token)),
        None => println!("token: none"),
    }
    match &cfg.remote {
        Some(remote) => {
            println!("repost_url: {}", remote.repost_url);
            println!("publish_url: {}", remote.publish_url);
        }
        None => println!("remote: none"),
    }
    Ok(())
}

// The success toast already carries the summary; rows are the detail.
fn print_report(report: &ExecutionReport, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(report).context("serialize report json")?
        );
        return Ok(());
    }
    for r in &report.results {
        let status = if r.success { "ok" } else { "failed" };
        let mut line = format!("{status} {} <- {}", r.target, r.source);
        if let Some(post_id) = &r.post_id {
            line.push_str(&format!(" post={post_id}"));
        }
        if let Some(error) = &r.error {
            line.push_str(&format!(" error={error}"));
        }
        println!("{line}");
    }
    Ok(())
}
