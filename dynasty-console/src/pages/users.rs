//! User management page

use shared::models::AdminUser;
use shared::permissions::Role;

use crate::editor::UserPermissionEditor;
use crate::input::{get_bool, get_input};
use crate::stores::UserStore;

use super::{toast_error, toast_success};

pub async fn run(users: &mut UserStore) {
    if let Err(err) = users.fetch().await {
        toast_error(&err);
    }

    loop {
        print_list(users.users());
        println!("\n1. Refresh  2. Edit  3. Toggle status  4. Delete  0. Back");
        match get_input("> ").as_str() {
            "0" => break,
            "1" => {
                if let Err(err) = users.fetch().await {
                    toast_error(&err);
                }
            }
            "2" => edit_user(users).await,
            "3" => {
                if let Some(id) = pick_user_id(users.users()) {
                    match users.toggle_status(&id).await {
                        Ok(()) => toast_success("User status updated"),
                        Err(err) => toast_error(&err),
                    }
                }
            }
            "4" => {
                if let Some(id) = pick_user_id(users.users())
                    && get_bool("Delete this user?", false)
                {
                    match users.delete(&id).await {
                        Ok(()) => toast_success("User deleted"),
                        Err(err) => toast_error(&err),
                    }
                }
            }
            _ => println!("❌ Invalid choice"),
        }
    }
}

fn print_list(users: &[AdminUser]) {
    println!("\n── Users ──");
    if users.is_empty() {
        println!("(no users)");
        return;
    }
    for (i, u) in users.iter().enumerate() {
        let status = if u.is_active() { "active" } else { "inactive" };
        println!(
            "{:>3}. {:<24} {:<28} {:<10} {}",
            i + 1,
            u.display_name(),
            u.email,
            u.role(),
            status
        );
    }
}

fn pick_user_id(users: &[AdminUser]) -> Option<String> {
    if users.is_empty() {
        println!("(no users)");
        return None;
    }
    let index: usize = get_input("User #: ").parse().ok()?;
    Some(users.get(index.checked_sub(1)?)?.id.clone())
}

async fn edit_user(users: &mut UserStore) {
    let id = match pick_user_id(users.users()) {
        Some(id) => id,
        None => return,
    };
    let user = match users.users().iter().find(|u| u.id == id) {
        Some(user) => user.clone(),
        None => return,
    };

    let mut editor = UserPermissionEditor::open(&user);
    println!("\nEditing {} <{}>", user.display_name(), user.email);

    loop {
        print_editor(&editor);
        println!("\nr. Change role  a. Toggle active  s. Save  c. Cancel");
        println!("(or a permission # to toggle it)");
        let choice = get_input("> ");
        match choice.as_str() {
            "c" => return,
            "s" => {
                let payload = editor.save();
                match users.update(editor.user_id(), &payload).await {
                    Ok(()) => {
                        toast_success(&format!("User saved as {}", payload.role));
                        return;
                    }
                    Err(err) => toast_error(&err),
                }
            }
            "a" => {
                let active = editor.is_active();
                editor.set_active(!active);
            }
            "r" => {
                println!("1. Admin  2. Panel User  3. Customer");
                match get_input("Role: ").as_str() {
                    "1" => editor.select_role(Role::Admin),
                    "2" => editor.select_role(Role::PanelUser),
                    "3" => editor.select_role(Role::Customer),
                    _ => println!("❌ Invalid choice"),
                }
            }
            other => {
                let toggled = other
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| i.checked_sub(1))
                    .and_then(|i| editor.known_keys().get(i).cloned());
                match toggled {
                    Some(key) => editor.toggle(&key),
                    None => println!("❌ Invalid choice"),
                }
            }
        }
    }
}

fn print_editor(editor: &UserPermissionEditor) {
    println!(
        "\nRole: {}   Active: {}",
        editor.role(),
        if editor.is_active() { "yes" } else { "no" }
    );
    println!("Permissions:");
    for (i, key) in editor.known_keys().iter().enumerate() {
        let mark = if editor.is_checked(key) { "☑" } else { "☐" };
        println!("  {:>2}. {mark} {key}", i + 1);
    }
}
