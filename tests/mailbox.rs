mod tests {
    use myrtio_knob_light::{
        ButtonState, ClickClassifier, Duration, Instant, Mailbox, click_mailbox,
        config::ClickThresholds,
    };

    #[test]
    fn test_mailbox_take_resets() {
        let mailbox: Mailbox<u8> = Mailbox::new(0);
        assert_eq!(mailbox.take(), 0);
        mailbox.post(7);
        assert_eq!(mailbox.peek(), 7);
        assert_eq!(mailbox.take(), 7);
        assert_eq!(mailbox.take(), 0);
    }

    #[test]
    fn test_mailbox_last_wins() {
        let mailbox = click_mailbox();
        mailbox.post(ButtonState::LongClick);
        mailbox.post(ButtonState::ShortClick);
        assert_eq!(mailbox.take_click_event(), ButtonState::ShortClick);
        assert_eq!(mailbox.take_click_event(), ButtonState::None);
    }

    #[test]
    fn test_static_mailbox() {
        static CLICKS: Mailbox<ButtonState> = click_mailbox();
        CLICKS.post(ButtonState::LongClick);
        assert_eq!(CLICKS.take(), ButtonState::LongClick);
    }

    #[test]
    fn test_classify_thresholds_are_exclusive() {
        let classifier = ClickClassifier::new(ClickThresholds {
            short: Duration::from_millis(20),
            long: Duration::from_millis(500),
        });
        assert_eq!(classifier.classify(Duration::from_millis(0)), None);
        assert_eq!(classifier.classify(Duration::from_millis(20)), None);
        assert_eq!(
            classifier.classify(Duration::from_millis(21)),
            Some(ButtonState::ShortClick)
        );
        assert_eq!(
            classifier.classify(Duration::from_millis(500)),
            Some(ButtonState::ShortClick)
        );
        assert_eq!(
            classifier.classify(Duration::from_millis(501)),
            Some(ButtonState::LongClick)
        );
    }

    #[test]
    fn test_classifier_edges() {
        let mailbox = click_mailbox();
        let mut classifier = ClickClassifier::default();

        // Release without press does nothing
        classifier.update(false, Instant::from_millis(50), &mailbox);
        assert!(!classifier.is_pressed());
        assert_eq!(mailbox.peek(), ButtonState::None);

        classifier.update(true, Instant::from_millis(100), &mailbox);
        assert!(classifier.is_pressed());
        // Still held: nothing posted yet
        classifier.update(true, Instant::from_millis(1000), &mailbox);
        assert_eq!(mailbox.peek(), ButtonState::None);

        classifier.update(false, Instant::from_millis(1000), &mailbox);
        assert!(!classifier.is_pressed());
        assert_eq!(mailbox.take(), ButtonState::LongClick);
    }

    #[test]
    fn test_clock_going_backwards_is_bounce() {
        let mailbox = click_mailbox();
        let mut classifier = ClickClassifier::default();
        classifier.update(true, Instant::from_millis(1000), &mailbox);
        classifier.update(false, Instant::from_millis(10), &mailbox);
        assert_eq!(mailbox.take(), ButtonState::None);
    }
}
