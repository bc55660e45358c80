use directory::{enrich, RandomChoices};
use rand::{rngs::StdRng, SeedableRng};
use shared_types::{Address, Department, RawUser, Role, Status};
use std::collections::HashMap;

fn raw_user(id: i64) -> RawUser {
    RawUser {
        id,
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        phone: "555".into(),
        website: "example.com".into(),
        address: Address {
            city: "Metro".into(),
            ..Address::default()
        },
    }
}

#[test]
fn test_seeded_enrichment_is_reproducible() {
    let mut first = RandomChoices::new(StdRng::seed_from_u64(7));
    let mut second = RandomChoices::new(StdRng::seed_from_u64(7));

    for id in 0..50 {
        assert_eq!(enrich(raw_user(id), &mut first), enrich(raw_user(id), &mut second));
    }
}

#[test]
fn test_enrichment_keeps_source_fields() {
    let mut choices = RandomChoices::new(StdRng::seed_from_u64(1));
    let employee = enrich(raw_user(42), &mut choices);
    assert_eq!(employee.id, 42);
    assert_eq!(employee.name, "User 42");
    assert_eq!(employee.email, "user42@example.com");
    assert_eq!(employee.city(), "Metro");
}

#[test]
fn test_enrichment_is_roughly_uniform() {
    let mut choices = RandomChoices::new(StdRng::seed_from_u64(2024));
    let mut departments: HashMap<Department, usize> = HashMap::new();
    let mut roles: HashMap<Role, usize> = HashMap::new();
    let mut statuses: HashMap<Status, usize> = HashMap::new();

    let samples = 12_000;
    for id in 0..samples {
        let employee = enrich(raw_user(id), &mut choices);
        *departments.entry(employee.department).or_default() += 1;
        *roles.entry(employee.role).or_default() += 1;
        *statuses.entry(employee.status).or_default() += 1;
    }

    for department in Department::ALL {
        let count = departments[&department];
        assert!((2_400..3_600).contains(&count), "{department}: {count}");
    }
    for role in Role::ALL {
        let count = roles[&role];
        assert!((2_400..3_600).contains(&count), "{role}: {count}");
    }
    for status in Status::ALL {
        let count = statuses[&status];
        assert!((3_200..4_800).contains(&count), "{status}: {count}");
    }
}
