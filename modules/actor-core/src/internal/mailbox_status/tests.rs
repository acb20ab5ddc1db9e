use super::*;

#[test]
fn claim_is_exclusive_until_released() {
  let status = MailboxStatus::new();

  assert!(status.try_claim());
  assert!(!status.try_claim());
  assert!(status.is_scheduled());

  status.release_claim();
  assert!(status.try_claim());
}

#[test]
fn closed_mailbox_refuses_claims_and_enqueues() {
  let status = MailboxStatus::new();

  assert!(status.close());
  assert!(!status.close());
  assert!(!status.try_claim());
  assert!(!status.register_enqueue());
  assert_eq!(status.activations(), 0);
}

#[test]
fn activations_track_enqueue_and_processing() {
  let status = MailboxStatus::new();

  assert!(status.register_enqueue());
  assert!(status.register_enqueue());
  assert!(status.register_enqueue());
  assert_eq!(status.activations(), 3);

  assert_eq!(status.count_processed(2), 1);
  assert_eq!(status.count_processed(5), 0);
  assert_eq!(status.activations(), 0);
}

#[test]
fn cancel_enqueue_rolls_back_a_rejected_offer() {
  let status = MailboxStatus::new();

  assert!(status.register_enqueue());
  status.cancel_enqueue();
  assert_eq!(status.activations(), 0);

  // rolling back with nothing registered is a no-op
  status.cancel_enqueue();
  assert_eq!(status.activations(), 0);
}

#[test]
fn suspension_is_independent_of_the_claim() {
  let status = MailboxStatus::new();

  status.suspend();
  assert!(status.is_suspended());
  assert!(status.try_claim());
  assert!(status.is_suspended());

  status.resume();
  assert!(!status.is_suspended());
  assert!(status.is_scheduled());
}
