/*
 * Unit tests for dispatcher module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_dispatcher_empty_queue
 * - test_dispatcher_single_request_always_selected
 * - test_dispatcher_selects_nearest
 * - test_dispatcher_tie_goes_to_lower_floor
 * - test_dispatcher_add_request_idempotent
 * - test_dispatcher_rejects_out_of_range
 * - test_dispatcher_remove_dispatched_floor
 *
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod dispatcher_tests {
    use crate::dispatcher::Dispatcher;
    use crate::dispatcher::RequestError;

    #[test]
    fn test_dispatcher_empty_queue() {
        // Purpose: Verify an empty queue yields no dispatch

        // Arrange
        let dispatcher = Dispatcher::new(8);

        // Act & Assert
        assert_eq!(dispatcher.select_next(1), None);
        assert!(!dispatcher.has_pending());
    }

    #[test]
    fn test_dispatcher_single_request_always_selected() {
        // Purpose: Verify every floor is selected when it is the only request

        for floor in 1..=8 {
            // Arrange
            let mut dispatcher = Dispatcher::new(8);
            dispatcher.add_request(floor).unwrap();

            // Act & Assert
            assert_eq!(dispatcher.select_next(3), Some(floor));
        }
    }

    #[test]
    fn test_dispatcher_selects_nearest() {
        // Purpose: Verify the closest pending floor wins

        // Arrange
        let mut dispatcher = Dispatcher::new(10);
        dispatcher.add_request(2).unwrap();
        dispatcher.add_request(6).unwrap();
        dispatcher.add_request(10).unwrap();

        // Act & Assert
        assert_eq!(dispatcher.select_next(7), Some(6));
        assert_eq!(dispatcher.select_next(1), Some(2));
        assert_eq!(dispatcher.select_next(10), Some(10));
    }

    #[test]
    fn test_dispatcher_tie_goes_to_lower_floor() {
        // Purpose: Verify equidistant requests resolve to the lower floor

        // Arrange
        let mut dispatcher = Dispatcher::new(8);
        dispatcher.add_request(7).unwrap();
        dispatcher.add_request(3).unwrap();

        // Act & Assert: floors 3 and 7 are both distance 2 from floor 5
        assert_eq!(dispatcher.select_next(5), Some(3));
    }

    #[test]
    fn test_dispatcher_add_request_idempotent() {
        // Purpose: Verify adding a pending floor twice equals adding it once

        // Arrange
        let mut dispatcher = Dispatcher::new(8);

        // Act
        dispatcher.add_request(4).unwrap();
        dispatcher.add_request(4).unwrap();

        // Assert
        assert_eq!(dispatcher.pending_count(), 1);
        assert_eq!(dispatcher.select_next(1), Some(4));
    }

    #[test]
    fn test_dispatcher_rejects_out_of_range() {
        // Purpose: Verify floors outside [1, n_floors] are rejected

        // Arrange
        let mut dispatcher = Dispatcher::new(8);

        // Act & Assert
        assert_eq!(
            dispatcher.add_request(0),
            Err(RequestError::OutOfRangeFloor { floor: 0, n_floors: 8 })
        );
        assert_eq!(
            dispatcher.add_request(9),
            Err(RequestError::OutOfRangeFloor { floor: 9, n_floors: 8 })
        );
        assert!(!dispatcher.has_pending());
    }

    #[test]
    fn test_dispatcher_remove_dispatched_floor() {
        // Purpose: Verify a dispatched floor is no longer selectable

        // Arrange
        let mut dispatcher = Dispatcher::new(8);
        dispatcher.add_request(3).unwrap();
        dispatcher.add_request(7).unwrap();

        // Act
        let next = dispatcher.select_next(5).unwrap();
        dispatcher.remove(next);

        // Assert
        assert_eq!(next, 3);
        assert_eq!(dispatcher.select_next(5), Some(7));
        dispatcher.remove(7);
        assert_eq!(dispatcher.select_next(5), None);
    }
}
