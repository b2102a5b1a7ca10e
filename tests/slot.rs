mod tests {
    use saber_blade_core::{CommandSlot, HiltCommand, Slot};

    static SHARED: CommandSlot = CommandSlot::new();

    #[test]
    fn test_empty_slot() {
        let slot: Slot<u8> = Slot::new();
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_publish_take_clears() {
        let slot = Slot::new();
        slot.publish(7u8);
        assert_eq!(slot.take(), Some(7));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_latest_value_wins() {
        let slot = Slot::new();
        slot.publish(1u8);
        slot.publish(2u8);
        assert_eq!(slot.take(), Some(2));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_handles_share_slot() {
        let slot = Slot::new();
        let sender = slot.sender();
        let receiver = slot.receiver();

        sender.publish(HiltCommand::new(0x21));
        assert_eq!(receiver.take(), Some(HiltCommand::new(0x21)));
        assert_eq!(receiver.take(), None);
    }

    #[test]
    fn test_static_placement() {
        SHARED.publish(HiltCommand::new(0xC0));
        assert_eq!(SHARED.take(), Some(HiltCommand::new(0xC0)));
    }
}
