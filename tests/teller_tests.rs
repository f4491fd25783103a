//! Teller and customer behavior tests

use bank_sim::simulation::{
    generate_customers, SimCustomer, SimError, SimTeller, VisitPurpose, DEFAULT_SALARY,
    MAX_NAME_LEN,
};

#[test]
fn test_name_validation() {
    assert!(matches!(SimTeller::new("ab"), Err(SimError::InvalidArgument(_))));
    assert!(matches!(SimCustomer::new("a"), Err(SimError::InvalidArgument(_))));

    let long: String = (0..108).map(|i| char::from(b'0' + (i % 9) as u8)).collect();
    let teller = SimTeller::new(&long).unwrap();
    assert_eq!(teller.name.chars().count(), MAX_NAME_LEN);
    let customer = SimCustomer::new(&long).unwrap();
    assert_eq!(customer.name.chars().count(), MAX_NAME_LEN);
}

#[test]
fn test_ids_are_unique() {
    assert_ne!(SimTeller::new("abcd").unwrap().id, SimTeller::new("fijk").unwrap().id);
    assert_ne!(SimCustomer::new("abcd").unwrap().id, SimCustomer::new("abcd").unwrap().id);
}

#[test]
fn test_teller_defaults() {
    let teller = SimTeller::new("abcd").unwrap();
    assert!(teller.is_available());
    assert_eq!(teller.salary, DEFAULT_SALARY);
    assert!(teller.serving.is_none());

    let teller = teller.with_salary(12000.0);
    assert_eq!(teller.salary, 12000.0);
}

#[test]
fn test_set_available() {
    let mut teller = SimTeller::new("abcd").unwrap();
    teller.set_available(false);
    assert!(!teller.is_available());
    teller.set_available(true);
    assert!(teller.is_available());
}

#[test]
fn test_serve_marks_both_sides() {
    let mut teller = SimTeller::new("abcd").unwrap();
    let mut customer = SimCustomer::new("Johnny").unwrap();

    teller.serve(&mut customer).unwrap();

    assert!(customer.was_served());
    assert!(!teller.is_available());
    assert_eq!(teller.serving, Some(customer.id));
}

#[test]
fn test_busy_teller_rejects_customer() {
    let mut teller = SimTeller::new("abcd").unwrap();
    let mut first = SimCustomer::new("First").unwrap();
    let mut second = SimCustomer::new("Second").unwrap();

    teller.serve(&mut first).unwrap();
    let result = teller.serve(&mut second);

    assert!(matches!(result, Err(SimError::Busy(_))));
    assert!(first.was_served(), "Earlier customer stays served");
    assert!(!second.was_served(), "Rejected customer is untouched");
    assert_eq!(teller.serving, Some(first.id));
}

#[test]
fn test_service_period_frees_teller() {
    let mut teller = SimTeller::new("abcd").unwrap().with_service_ticks(2);
    let mut customer = SimCustomer::new("Johnny").unwrap();
    teller.serve(&mut customer).unwrap();

    assert!(!teller.advance());
    assert!(!teller.is_available());
    assert!(teller.advance());
    assert!(teller.is_available());
    assert!(teller.serving.is_none());

    // Idle tellers have nothing to advance
    assert!(!teller.advance());
}

#[test]
fn test_wait_accrual_stops_after_service() {
    let mut customer = SimCustomer::new("Johnny").unwrap();
    customer.accrue_wait(1);
    customer.accrue_wait(3);
    assert_eq!(customer.waited_ticks(), 4);

    let mut teller = SimTeller::new("abcd").unwrap();
    teller.serve(&mut customer).unwrap();
    customer.accrue_wait(5);
    assert_eq!(customer.waited_ticks(), 4);
}

#[test]
fn test_default_purpose() {
    let customer = SimCustomer::new("Johnny").unwrap();
    assert_eq!(customer.visit_purpose, VisitPurpose::Other);
    let customer = SimCustomer::with_purpose("Johnny", VisitPurpose::Deposit).unwrap();
    assert_eq!(customer.visit_purpose, VisitPurpose::Deposit);
}

#[test]
fn test_generated_population() {
    let customers = generate_customers(12, Some(7)).unwrap();
    assert_eq!(customers.len(), 12);
    assert_eq!(customers[0].name, "000");
    assert_eq!(customers[11].name, "011");
    assert!(customers.iter().all(|c| !c.was_served()));

    let again = generate_customers(12, Some(7)).unwrap();
    let purposes: Vec<_> = customers.iter().map(|c| c.visit_purpose).collect();
    let purposes_again: Vec<_> = again.iter().map(|c| c.visit_purpose).collect();
    assert_eq!(purposes, purposes_again, "Same seed gives same purposes");
}

#[test]
fn test_wait_accrual_saturates() {
    let mut customer = SimCustomer::new("Johnny").unwrap();
    customer.accrue_wait(u64::MAX);
    customer.accrue_wait(1);
    assert_eq!(customer.waited_ticks(), u64::MAX);
}
