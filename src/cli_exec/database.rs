use super::*;

pub(super) fn handle_init_command(force: bool) -> Result<()> {
    let root = std::env::current_dir().context("get current dir")?;
    LocalStore::init(&root, force)?;
    println!("Initialized panel at {}", root.display());
    Ok(())
}

pub(super) fn handle_group_command(store: &LocalStore, command: GroupCommands) -> Result<()> {
    match command {
        GroupCommands::Add {
            external_id,
            name,
            category,
            members,
            json,
        } => {
            let draft = GroupDraft {
                external_group_id: external_id,
                name,
                category,
                member_count: members,
            };
            validate_draft(&draft)?;
            require_category(store, &draft.category)?;
            let group: Group = store.add(draft).context("add group")?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&group).context("serialize group json")?
                );
            } else {
                println!("{}", group.id);
            }
        }
        GroupCommands::List { category, json } => {
            let mut groups = store.load::<Group>();
            if let Some(category) = &category {
                groups.retain(|g| &g.category == category);
            }
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&groups).context("serialize groups json")?
                );
            } else {
                for g in &groups {
                    println!(
                        "{} {} {} {} {}",
                        g.id, g.external_group_id, g.name, g.category, g.member_count
                    );
                }
            }
        }
        GroupCommands::Rm { id } => {
            store.remove::<Group>(&EntityId(id.clone()))?;
            println!("Removed {id}");
        }
    }
    Ok(())
}

pub(super) fn handle_post_command(store: &LocalStore, command: PostCommands) -> Result<()> {
    match command {
        PostCommands::Add {
            category,
            text,
            media,
            json,
        } => {
            let draft = PostDraft {
                category,
                text,
                media,
            };
            validate_draft(&draft)?;
            require_category(store, &draft.category)?;
            let post: Post = store.add(draft).context("add post")?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&post).context("serialize post json")?
                );
            } else {
                println!("{}", post.id);
            }
        }
        PostCommands::List { category, json } => {
            let mut posts = store.load::<Post>();
            if let Some(category) = &category {
                posts.retain(|p| &p.category == category);
            }
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&posts).context("serialize posts json")?
                );
            } else {
                for p in &posts {
                    let preview: String = p.text.chars().take(40).collect();
                    println!("{} {} {}", p.id, p.category, preview);
                }
            }
        }
        PostCommands::Rm { id } => {
            store.remove::<Post>(&EntityId(id.clone()))?;
            println!("Removed {id}");
        }
    }
    Ok(())
}

pub(super) fn handle_category_command(
    store: &LocalStore,
    command: CategoryCommands,
) -> Result<()> {
    match command {
        CategoryCommands::Add { name, json } => {
            let draft = CategoryDraft { name };
            validate_draft(&draft)?;
            let category: Category = store.add(draft).context("add category")?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&category).context("serialize category json")?
                );
            } else {
                println!("{}", category.id);
            }
        }
        CategoryCommands::List { json } => {
            let categories = store.load::<Category>();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&categories)
                        .context("serialize categories json")?
                );
            } else {
                for c in &categories {
                    println!("{} {}", c.id, c.name);
                }
            }
        }
        CategoryCommands::Rm { id } => {
            // Groups and posts keep the category name; nothing cascades.
            store.remove::<Category>(&EntityId(id.clone()))?;
            println!("Removed {id}");
        }
    }
    Ok(())
}

// Validation failures go through the notification sink before they
// propagate, matching the execution flows' outcome reporting.
fn validate_draft<D: Draft>(draft: &D) -> Result<()> {
    if let Err(err) = draft.validate() {
        TermNotifier.notify("Database", &err.to_string(), Severity::Error);
        return Err(err.into());
    }
    Ok(())
}

fn require_category(store: &LocalStore, name: &str) -> Result<()> {
    if !store.load::<Category>().iter().any(|c| c.name == name) {
        anyhow::bail!("unknown category: {name} (run `vkm category add --name ...`)");
    }
    Ok(())
}
