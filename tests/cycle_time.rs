#[cfg(test)]
mod tests {
    use workhours::libs::cycle_time::{summarize, CycleOptions, CycleReport, TicketStatus};
    use workhours::libs::tickets::{Ticket, Tickets};
    use workhours::libs::working_hours::WorkingHours;

    const TICKETS_CSV: &str = "\
id,name,created,closed
HD-1,Printer offline,2024-01-08 10:00:00,2024-01-08 15:00:00
HD-2,VPN access,2024-01-05T16:00:00,2024-01-08T10:00:00
HD-3,New laptop,2024-01-08T09:00:00,2024-01-10T17:00:00
HD-4,Password reset,2024-01-09T09:30:00,
HD-5,Broken chair,last tuesday,2024-01-09T12:00:00
";

    fn load() -> Vec<Ticket> {
        Tickets::from_reader(TICKETS_CSV.as_bytes()).unwrap()
    }

    #[test]
    fn test_reads_ticket_csv() {
        let tickets = load();
        assert_eq!(tickets.len(), 5);
        assert_eq!(tickets[0].id, "HD-1");
        assert_eq!(tickets[0].name.as_deref(), Some("Printer offline"));
        assert!(tickets[3].is_open());
        assert!(!tickets[0].is_open());
    }

    #[test]
    fn test_name_column_is_optional() {
        let csv = "id,created,closed\nA,2024-01-08T09:00:00,2024-01-08T10:00:00\n";
        let tickets = Tickets::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(tickets, vec![Ticket::new("A", "2024-01-08T09:00:00", Some("2024-01-08T10:00:00"))]);
    }

    #[test]
    fn test_missing_required_column_fails() {
        let csv = "id,closed\nA,2024-01-08T10:00:00\n";
        assert!(Tickets::from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_report_rows() {
        let report = CycleReport::build(&load(), &WorkingHours::default(), CycleOptions::default()).unwrap();
        let hours: Vec<f64> = report.rows.iter().map(|row| row.hours).collect();
        assert_eq!(hours, vec![5.0, 2.0, 24.0, 0.0, 0.0]);

        let statuses: Vec<TicketStatus> = report.rows.iter().map(|row| row.status).collect();
        assert_eq!(
            statuses,
            vec![
                TicketStatus::Closed,
                TicketStatus::Closed,
                TicketStatus::Closed,
                TicketStatus::Open,
                TicketStatus::Invalid
            ]
        );
        assert_eq!(report.rows[0].formatted, "5.0 hrs");
        assert_eq!(report.rows[3].formatted, "-");
        assert!(report.rows.iter().all(|row| row.on_time.is_none()));
    }

    #[test]
    fn test_summary_over_closed_tickets_only() {
        let report = CycleReport::build(&load(), &WorkingHours::default(), CycleOptions::default()).unwrap();
        let summary = &report.summary;
        assert_eq!(summary.closed, 3);
        assert_eq!(summary.open, 1);
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.total_hours, 31.0);
        assert!((summary.average_hours - 31.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.median_hours, 5.0);
        assert!(summary.on_time.is_none());
        assert!(summary.on_time_rate.is_none());
    }

    #[test]
    fn test_sla_on_time_share() {
        let options = CycleOptions {
            sla_hours: Some(8.0),
            ..CycleOptions::default()
        };
        let report = CycleReport::build(&load(), &WorkingHours::default(), options).unwrap();
        assert_eq!(report.rows[0].on_time, Some(true));
        assert_eq!(report.rows[2].on_time, Some(false));
        assert_eq!(report.rows[3].on_time, None);
        assert_eq!(report.summary.on_time, Some(2));
        let rate = report.summary.on_time_rate.unwrap();
        assert!((rate - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_show_days_formatting() {
        let options = CycleOptions {
            show_days: true,
            ..CycleOptions::default()
        };
        let report = CycleReport::build(&load(), &WorkingHours::default(), options).unwrap();
        assert_eq!(report.rows[2].formatted, "3d");
        assert_eq!(report.rows[1].formatted, "2.0 hrs");
    }

    #[test]
    fn test_strict_mode_fails_on_bad_timestamp() {
        let options = CycleOptions {
            strict: true,
            ..CycleOptions::default()
        };
        let error = CycleReport::build(&load(), &WorkingHours::default(), options).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("HD-5"), "{}", message);
        assert!(message.contains("last tuesday"), "{}", message);
    }

    #[test]
    fn test_median_with_even_count() {
        let tickets = vec![
            Ticket::new("a", "2024-01-08T09:00:00", Some("2024-01-08T10:00:00")),
            Ticket::new("b", "2024-01-08T09:00:00", Some("2024-01-08T12:00:00")),
            Ticket::new("c", "2024-01-08T09:00:00", Some("2024-01-08T11:00:00")),
            Ticket::new("d", "2024-01-08T09:00:00", Some("2024-01-08T17:00:00")),
        ];
        let report = CycleReport::build(&tickets, &WorkingHours::default(), CycleOptions::default()).unwrap();
        assert_eq!(report.summary.median_hours, 2.5);
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize(&[], Some(4.0));
        assert_eq!(summary.closed, 0);
        assert_eq!(summary.average_hours, 0.0);
        assert_eq!(summary.median_hours, 0.0);
        assert_eq!(summary.on_time, Some(0));
        assert_eq!(summary.on_time_rate, Some(0.0));
    }
}
