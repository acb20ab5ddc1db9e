use super::*;

#[test]
fn sender_metadata_survives_mapping() {
  let sender = ActorPath::root().child("user").child("pinger");
  let envelope = Envelope::with_sender(21u32, sender.clone());

  let doubled = envelope.map(|n| n * 2);
  assert_eq!(doubled.payload(), &42);
  assert_eq!(doubled.sender(), Some(&sender));
}

#[test]
fn into_parts_consumes_exactly_once() {
  let envelope = Envelope::new("ping");
  let (payload, sender) = envelope.into_parts();

  assert_eq!(payload, "ping");
  assert!(sender.is_none());
}
