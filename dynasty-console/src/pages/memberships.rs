//! Membership tiers page

use shared::models::MembershipPlan;

use crate::editor::TierForm;
use crate::input::{get_bool, get_f64, get_i64, get_input, get_input_with_default, get_lines};
use crate::stores::MembershipStore;

use super::{toast_error, toast_success};

pub async fn run(memberships: &mut MembershipStore) {
    if let Err(err) = memberships.fetch().await {
        toast_error(&err);
    }

    loop {
        print_list(memberships.plans());
        println!("\n1. Refresh  2. Add tier  3. Edit tier  4. Delete tier  0. Back");
        match get_input("> ").as_str() {
            "0" => break,
            "1" => {
                if let Err(err) = memberships.fetch().await {
                    toast_error(&err);
                }
            }
            "2" => add_tier(memberships).await,
            "3" => edit_tier(memberships).await,
            "4" => {
                if let Some(id) = pick_plan_id(memberships.plans())
                    && get_bool("Delete this tier?", false)
                {
                    match memberships.delete(&id).await {
                        Ok(()) => toast_success("Membership tier deleted"),
                        Err(err) => toast_error(&err),
                    }
                }
            }
            _ => println!("❌ Invalid choice"),
        }
    }
}

fn print_list(plans: &[MembershipPlan]) {
    println!("\n── Membership Tiers ──");
    if plans.is_empty() {
        println!("(no tiers)");
        return;
    }
    for (i, p) in plans.iter().enumerate() {
        let flag = if p.is_active { " " } else { "✗" };
        println!(
            "{:>3}. {flag} {:<16} ₹{} → ₹{} ({}% off)  {} days",
            i + 1,
            p.name,
            p.original_price,
            p.discount_price,
            p.discount_percent(),
            p.duration_days
        );
    }
}

fn pick_plan_id(plans: &[MembershipPlan]) -> Option<String> {
    if plans.is_empty() {
        println!("(no tiers)");
        return None;
    }
    let index: usize = get_input("Tier #: ").parse().ok()?;
    Some(plans.get(index.checked_sub(1)?)?.id.clone())
}

/// Fill pricing on a form, either from the original price or by inferring
/// it from a target (already discounted) price.
fn prompt_pricing(form: &mut TierForm) {
    println!("1. Set original price  2. Set target price (infer original)");
    match get_input("Pricing mode: ").as_str() {
        "2" => loop {
            let price = get_i64("Target price (₹)", form.discount_price());
            let percent = get_f64("Discount (%)", form.discount_percent);
            match form.set_target_price(price, percent) {
                Ok(()) => break,
                Err(err) => toast_error(&err),
            }
        },
        _ => {
            form.original_price = get_i64("Original price (₹)", form.original_price);
            form.discount_percent = get_f64("Discount (%)", form.discount_percent);
        }
    }
    println!(
        "→ Discounted price: ₹{}   Savings: ₹{}",
        form.discount_price(),
        form.savings()
    );
}

async fn add_tier(memberships: &mut MembershipStore) {
    let mut form = TierForm::new();
    form.name = get_input("Tier name: ");
    form.duration_days = get_i64("Duration (days)", form.duration_days);
    prompt_pricing(&mut form);
    form.benefits_text = get_lines("Benefits, one per line");
    form.is_best_value = get_bool("Mark as best value?", false);

    match form.build_payload() {
        Ok(payload) => match memberships.create(&payload).await {
            Ok(()) => toast_success("Membership tier added"),
            Err(err) => toast_error(&err),
        },
        Err(err) => toast_error(&err),
    }
}

async fn edit_tier(memberships: &mut MembershipStore) {
    let id = match pick_plan_id(memberships.plans()) {
        Some(id) => id,
        None => return,
    };
    let plan = match memberships.plans().iter().find(|p| p.id == id) {
        Some(plan) => plan.clone(),
        None => return,
    };

    let mut form = TierForm::from_plan(&plan);
    form.name = get_input_with_default("Tier name", &form.name);
    form.duration_days = get_i64("Duration (days)", form.duration_days);
    prompt_pricing(&mut form);
    if get_bool("Edit benefits?", false) {
        form.benefits_text = get_lines("Benefits, one per line");
    }

    match form.build_payload() {
        Ok(payload) => match memberships.update(&id, &payload).await {
            Ok(()) => toast_success("Membership tier updated"),
            Err(err) => toast_error(&err),
        },
        Err(err) => toast_error(&err),
    }
}
