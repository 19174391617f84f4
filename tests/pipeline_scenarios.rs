use fractic_ifta_fuel_tax::{
    entities::{
        Advisory, FuelTaxReport, FuelTaxReportSpec, FuelType, Jurisdiction, NetTaxStatus,
        ReportingPeriod, TripEntry,
    },
    errors::ApportionmentError,
    ext::standard_rates::STANDARD_RATES_2025_Q4,
    pipeline::{aggregate, build_report},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn spec(fuel_type: FuelType, entries: Vec<TripEntry>) -> FuelTaxReportSpec {
    FuelTaxReportSpec {
        base_jurisdiction: Jurisdiction::TX,
        reporting_period: ReportingPeriod::parse("2025-Q4"),
        fuel_type,
        entries,
    }
}

fn diesel_report(entries: Vec<TripEntry>) -> Result<FuelTaxReport, ApportionmentError> {
    build_report(&spec(FuelType::Diesel, entries), &STANDARD_RATES_2025_Q4)
}

#[test]
fn single_entry_breaks_even() {
    let report = diesel_report(vec![TripEntry::new(
        Jurisdiction::TX,
        dec!(1000),
        dec!(150),
    )])
    .unwrap();

    assert_eq!(report.totals.fleet_mpg.round_dp(3), dec!(6.667));
    let tx = report.result_for(Jurisdiction::TX).unwrap();
    assert_eq!(tx.taxable_gallons, dec!(150));
    assert_eq!(tx.tax_owed, dec!(30));
    assert_eq!(tx.tax_paid_at_pump, dec!(30));
    assert_eq!(tx.net_tax, Decimal::ZERO);
    assert_eq!(report.totals.net_status(), NetTaxStatus::AmountDue);
    assert!(report.advisories.is_empty());
}

#[test]
fn same_rate_purchase_and_use_nets_to_zero_per_jurisdiction() {
    let report = diesel_report(vec![
        TripEntry::new(Jurisdiction::TX, dec!(1000), dec!(100)),
        TripEntry::new(Jurisdiction::CA, dec!(500), dec!(50)),
    ])
    .unwrap();

    assert_eq!(report.totals.total_miles, dec!(1500));
    assert_eq!(report.totals.total_gallons_purchased, dec!(150));
    assert_eq!(report.totals.fleet_mpg, dec!(10));

    let tx = report.result_for(Jurisdiction::TX).unwrap();
    assert_eq!(tx.taxable_gallons, dec!(100));
    assert_eq!(tx.tax_owed, dec!(20));
    assert_eq!(tx.tax_paid_at_pump, dec!(20));
    assert_eq!(tx.net_tax, Decimal::ZERO);

    let ca = report.result_for(Jurisdiction::CA).unwrap();
    assert_eq!(ca.taxable_gallons, dec!(50));
    assert_eq!(ca.tax_owed, dec!(48.55));
    assert_eq!(ca.tax_paid_at_pump, dec!(48.55));
    assert_eq!(ca.net_tax, Decimal::ZERO);

    assert_eq!(report.totals.net_tax_due, Decimal::ZERO);
    // California sorts before Texas.
    assert_eq!(report.results[0].jurisdiction, Jurisdiction::CA);
}

#[test]
fn cross_jurisdiction_purchase_splits_into_due_and_credit() {
    let report = diesel_report(vec![
        TripEntry::new(Jurisdiction::NY, dec!(1000), dec!(0)),
        TripEntry::new(Jurisdiction::NJ, dec!(0), dec!(150)),
    ])
    .unwrap();

    let ny = report.result_for(Jurisdiction::NY).unwrap();
    assert_eq!(ny.taxable_gallons, dec!(150));
    assert_eq!(ny.tax_owed, dec!(58.2));
    assert_eq!(ny.tax_paid_at_pump, Decimal::ZERO);
    assert_eq!(ny.net_tax, dec!(58.2));

    let nj = report.result_for(Jurisdiction::NJ).unwrap();
    assert_eq!(nj.taxable_gallons, Decimal::ZERO);
    assert_eq!(nj.tax_owed, Decimal::ZERO);
    assert_eq!(nj.tax_paid_at_pump, dec!(77.85));
    assert_eq!(nj.net_tax, dec!(-77.85));

    assert_eq!(report.totals.net_tax_due, dec!(-19.65));
    assert_eq!(report.totals.net_status(), NetTaxStatus::Credit);
    assert_eq!(report.totals.net_magnitude(), dec!(19.65));
}

#[test]
fn surcharge_liability_is_independent_of_purchases() {
    let bought_in_kentucky =
        diesel_report(vec![TripEntry::new(Jurisdiction::KY, dec!(1000), dec!(200))]).unwrap();
    let bought_elsewhere = diesel_report(vec![
        TripEntry::new(Jurisdiction::KY, dec!(1000), dec!(0)),
        TripEntry::new(Jurisdiction::TX, dec!(0), dec!(200)),
    ])
    .unwrap();

    for report in [&bought_in_kentucky, &bought_elsewhere] {
        assert_eq!(report.totals.fleet_mpg, dec!(5));
        let ky = report.result_for(Jurisdiction::KY).unwrap();
        assert_eq!(ky.taxable_gallons, dec!(200));
        assert_eq!(ky.tax_rate, dec!(0.220));
        assert_eq!(ky.tax_owed, dec!(44));
        assert_eq!(ky.surcharge, Some(dec!(21)));
        assert_eq!(ky.total_liability(), dec!(65));
    }
    assert_eq!(bought_in_kentucky.totals.total_tax_owed, dec!(65));
    assert_eq!(bought_in_kentucky.net_tax_for(Jurisdiction::KY), dec!(21));
    assert_eq!(bought_elsewhere.net_tax_for(Jurisdiction::KY), dec!(65));
}

#[test]
fn zero_gallons_is_insufficient_data() {
    let result = diesel_report(vec![
        TripEntry::new(Jurisdiction::TX, dec!(1000), dec!(0)),
        TripEntry::new(Jurisdiction::OK, dec!(300), dec!(0)),
    ]);
    assert_eq!(
        result,
        Err(ApportionmentError::InsufficientData {
            total_miles: dec!(1300),
            total_gallons: Decimal::ZERO,
        })
    );
}

#[test]
fn blank_rows_are_empty_input() {
    let result = diesel_report(vec![TripEntry::blank(), TripEntry::blank()]);
    assert_eq!(result, Err(ApportionmentError::EmptyInput));
}

#[test]
fn weight_mile_jurisdiction_is_flagged_not_balanced() {
    let report = diesel_report(vec![
        TripEntry::new(Jurisdiction::OR, dec!(800), dec!(0)),
        TripEntry::new(Jurisdiction::WA, dec!(200), dec!(200)),
        TripEntry::blank(),
    ])
    .unwrap();

    let or = report.result_for(Jurisdiction::OR).unwrap();
    assert!(or.is_rate_missing());
    assert_eq!(or.taxable_gallons, dec!(160));
    assert_eq!(or.tax_owed, Decimal::ZERO);
    assert_eq!(or.net_tax, Decimal::ZERO);
    assert_eq!(
        report.advisories,
        vec![
            Advisory::NoFuelTaxRate {
                jurisdiction: Jurisdiction::OR,
                fuel_type: FuelType::Diesel,
            },
            Advisory::IgnoredEntries(1),
        ]
    );

    // Oregon does tax gasoline per gallon.
    let gasoline = build_report(
        &spec(
            FuelType::Gasoline,
            vec![TripEntry::new(Jurisdiction::OR, dec!(800), dec!(40))],
        ),
        &STANDARD_RATES_2025_Q4,
    )
    .unwrap();
    assert!(gasoline.advisories.is_empty());
}

#[test]
fn aggregate_exposes_ignored_row_count() {
    let aggregate = aggregate(&[
        TripEntry::new(Jurisdiction::TX, dec!(100), dec!(10)),
        TripEntry::new(Jurisdiction::TX, dec!(0), dec!(0)),
        TripEntry::blank(),
    ])
    .unwrap();
    assert_eq!(aggregate.ignored_entries, 2);
    assert_eq!(aggregate.summaries.len(), 1);
}
