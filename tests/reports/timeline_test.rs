#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use pizzeria_reports::model::{Dataset, Order, OrderLine, Pizza, PizzaType};
    use pizzeria_reports::reports::{
        cumulative_revenue_by_date, orders_by_hour, total_orders, total_revenue, HourlyOrders,
    };
    use rust_decimal::Decimal;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        s.parse().unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn order(id: u64, date_s: &str, time_s: &str) -> Order {
        Order {
            id,
            date: date(date_s),
            time: time(time_s),
        }
    }

    fn line(id: u64, order_id: u64, pizza_id: &str, quantity: u32) -> OrderLine {
        OrderLine {
            id,
            order_id,
            pizza_id: pizza_id.to_string(),
            quantity,
        }
    }

    fn pizza(id: &str, type_id: &str, size: &str, price: &str) -> Pizza {
        Pizza {
            id: id.to_string(),
            type_id: type_id.to_string(),
            size: size.to_string(),
            price: dec(price),
        }
    }

    fn pizza_type(id: &str, name: &str, category: &str) -> PizzaType {
        PizzaType {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::new(
            vec![
                order(1, "2023-01-01", "12:30:00"),
                order(2, "2023-01-01", "18:05:00"),
                order(3, "2023-01-02", "12:45:00"),
                order(4, "2023-01-03", "19:10:00"),
            ],
            vec![
                line(1, 1, "marg_m", 2),
                line(2, 1, "pep_l", 1),
                line(3, 2, "veg_m", 3),
                line(4, 2, "chz_l", 1),
                line(5, 3, "pep_m", 2),
                line(6, 3, "marg_l", 1),
                line(7, 4, "pep_l", 2),
                line(8, 4, "marg_m", 1),
            ],
            vec![
                pizza("marg_m", "margherita", "M", "10.00"),
                pizza("marg_l", "margherita", "L", "14.50"),
                pizza("pep_m", "pepperoni", "M", "12.00"),
                pizza("pep_l", "pepperoni", "L", "16.25"),
                pizza("veg_m", "veggie_garden", "M", "11.00"),
                pizza("chz_l", "four_cheese", "L", "15.00"),
            ],
            vec![
                pizza_type("margherita", "Margherita", "Classic"),
                pizza_type("pepperoni", "Pepperoni", "Classic"),
                pizza_type("veggie_garden", "Garden Veggie", "Veggie"),
                pizza_type("four_cheese", "Four Cheese", "Cheese"),
            ],
        )
    }

    #[test]
    fn test_orders_by_hour_ascending_present_hours_only() {
        let data = sample_dataset();

        let rows = orders_by_hour(&data);
        assert_eq!(
            rows,
            vec![
                HourlyOrders { hour: 12, orders: 2 },
                HourlyOrders { hour: 18, orders: 1 },
                HourlyOrders { hour: 19, orders: 1 },
            ]
        );
    }

    #[test]
    fn test_orders_by_hour_empty_dataset() {
        assert_eq!(orders_by_hour(&Dataset::default()), vec![]);
    }

    #[test]
    fn test_single_order_worked_example() {
        let data = Dataset::new(
            vec![order(1, "2023-01-01", "12:30:00")],
            vec![line(1, 1, "P1", 2)],
            vec![pizza("P1", "T1", "M", "10.00")],
            vec![pizza_type("T1", "Classic", "Veggie")],
        );

        assert_eq!(total_orders(&data), 1);
        assert_eq!(total_revenue(&data).unwrap(), dec("20.00"));
        assert_eq!(
            orders_by_hour(&data),
            vec![HourlyOrders { hour: 12, orders: 1 }]
        );
    }

    #[test]
    fn test_cumulative_revenue_runs_ascending_by_date() {
        let data = sample_dataset();

        let rows = cumulative_revenue_by_date(&data).unwrap();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].date, date("2023-01-01"));
        assert_eq!(rows[0].cumulative_revenue, dec("84.25"));

        assert_eq!(rows[1].date, date("2023-01-02"));
        assert_eq!(rows[1].cumulative_revenue, dec("122.75"));

        assert_eq!(rows[2].date, date("2023-01-03"));
        assert_eq!(rows[2].cumulative_revenue, dec("165.25"));
    }

    #[test]
    fn test_cumulative_revenue_sorts_out_of_order_input() {
        let mut data = sample_dataset();
        data.orders.reverse();
        data.order_lines.reverse();

        let rows = cumulative_revenue_by_date(&data).unwrap();
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();

        assert_eq!(
            dates,
            vec![date("2023-01-01"), date("2023-01-02"), date("2023-01-03")]
        );
        assert_eq!(rows[2].cumulative_revenue, dec("165.25"));
    }

    #[test]
    fn test_cumulative_revenue_empty_dataset() {
        assert_eq!(cumulative_revenue_by_date(&Dataset::default()).unwrap(), vec![]);
    }
}
