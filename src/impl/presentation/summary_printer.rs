use iso_currency::Currency;

use crate::{
    entities::{FuelTaxReport, ReportingPeriod},
    presentation::utils::{format_amount, format_fixed, format_grouped, format_signed_amount},
};

pub(crate) struct SummaryPrinter {
    currency: Currency,
}

impl SummaryPrinter {
    pub(crate) fn new() -> Self {
        Self {
            currency: Currency::USD,
        }
    }

    pub(crate) fn print_summary(&self, report: &FuelTaxReport) -> String {
        let mut output = String::new();

        output.push_str(
            "; --- IFTA Fuel Tax Report -----------------------------------------------------\n\n",
        );
        self.print_header(&mut output, report);
        output.push_str("\n\n");

        output.push_str(
            "; --- Jurisdictions ------------------------------------------------------------\n\n",
        );
        self.print_jurisdictions(&mut output, report);
        output.push_str("\n\n");

        output.push_str(
            "; --- Totals -------------------------------------------------------------------\n\n",
        );
        self.print_totals(&mut output, report);

        if !report.advisories.is_empty() {
            output.push_str("\n\n");
            output.push_str(
                "; --- Notes --------------------------------------------------------------------\n\n",
            );
            self.print_advisories(&mut output, report);
        }

        output
    }

    fn print_header(&self, output: &mut String, report: &FuelTaxReport) {
        output.push_str(&format!(
            "{:20} {} ({})\n",
            "Base jurisdiction:",
            report.base_jurisdiction.name(),
            report.base_jurisdiction.code()
        ));
        output.push_str(&format!(
            "{:20} {}\n",
            "Reporting period:",
            self.period_label(&report.reporting_period)
        ));
        if let Some(due) = report.reporting_period.filing_due_date() {
            output.push_str(&format!("{:20} {}\n", "Filing due:", due));
        }
        output.push_str(&format!("{:20} {}\n", "Fuel type:", report.fuel_type));
    }

    fn period_label(&self, period: &ReportingPeriod) -> String {
        match (period.start_date(), period.end_date()) {
            (Some(start), Some(end)) => format!("{} ({} to {})", period, start, end),
            _ => period.to_string(),
        }
    }

    fn print_jurisdictions(&self, output: &mut String, report: &FuelTaxReport) {
        output.push_str(&format!(
            "{:26} {:>10} {:>10} {:>7} {:>12} {:>10} {:>12} {:>12}\n",
            "State", "Miles", "Taxable", "Rate", "Tax Owed", "Purchased", "Tax Paid", "Net Tax"
        ));
        for r in &report.results {
            let marker = if r.is_rate_missing() { "*" } else { "" };
            output.push_str(&format!(
                "{:26} {:>10} {:>10} {:>7} {:>12} {:>10} {:>12} {:>12}\n",
                format!("{}{}", r.jurisdiction.name(), marker),
                format_grouped(r.miles, 0),
                format_grouped(r.taxable_gallons, 2),
                format_fixed(r.tax_rate, 3),
                format_amount(r.total_liability(), self.currency),
                format_grouped(r.gallons_purchased, 2),
                format_amount(r.tax_paid_at_pump, self.currency),
                format_signed_amount(r.net_tax, self.currency),
            ));
        }
    }

    fn print_totals(&self, output: &mut String, report: &FuelTaxReport) {
        let totals = &report.totals;
        let lines = [
            ("Total miles:", format_grouped(totals.total_miles, 0)),
            (
                "Total gallons:",
                format_grouped(totals.total_gallons_purchased, 2),
            ),
            ("Fleet MPG:", format_fixed(totals.fleet_mpg, 2)),
            (
                "Total tax owed:",
                format_amount(totals.total_tax_owed, self.currency),
            ),
            (
                "Total tax paid:",
                format_amount(totals.total_tax_paid, self.currency),
            ),
        ];
        for (label, value) in lines {
            output.push_str(&format!("{:20} {:>14}\n", label, value));
        }
        output.push_str(&format!(
            "{:20} {:>14}\n",
            format!("{}:", totals.net_status().label()),
            format_amount(totals.net_magnitude(), self.currency),
        ));
    }

    fn print_advisories(&self, output: &mut String, report: &FuelTaxReport) {
        for advisory in &report.advisories {
            let s = advisory.to_string();
            let mut lines = textwrap::wrap(&s, 76).into_iter();
            if let Some(first) = lines.next() {
                output.push_str(&format!("  * {}\n", first));
            }
            for line in lines {
                output.push_str(&format!("    {}\n", line));
            }
        }
    }
}
