// Built-in sample dataset used when no dataset file is configured
use crate::domain::enterprise::{Coordinates, Deviation, DeviationStatus, Enterprise, RepairStats};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid")
}

fn deviation(
    id: u32,
    kind: &str,
    deadline: NaiveDate,
    responsible: &str,
    description: &str,
    status: DeviationStatus,
) -> Deviation {
    Deviation {
        id,
        kind: kind.to_string(),
        deadline,
        responsible: responsible.to_string(),
        description: description.to_string(),
        status,
    }
}

pub fn sample_enterprises() -> Vec<Enterprise> {
    vec![
        Enterprise {
            id: 1,
            name: "Московский завод".to_string(),
            region: "Москва".to_string(),
            employees: 1247,
            repair_stats: RepairStats { completed: 89, pending: 12, overdue: 3 },
            deviations: vec![
                deviation(
                    1,
                    "Превышение сроков ремонта",
                    date(2025, 10, 15),
                    "Иванов И.И.",
                    "Задержка поставки запчастей для оборудования цеха №3",
                    DeviationStatus::Critical,
                ),
                deviation(
                    2,
                    "Недокомплект персонала",
                    date(2025, 10, 20),
                    "Петров П.П.",
                    "Требуется 5 механиков для обслуживания нового оборудования",
                    DeviationStatus::Warning,
                ),
            ],
            coordinates: Coordinates { x: 55.0, y: 37.0 },
        },
        Enterprise {
            id: 2,
            name: "Санкт-Петербургский комбинат".to_string(),
            region: "Санкт-Петербург".to_string(),
            employees: 892,
            repair_stats: RepairStats { completed: 76, pending: 8, overdue: 1 },
            deviations: vec![deviation(
                3,
                "Превышение бюджета",
                date(2025, 11, 1),
                "Сидоров С.С.",
                "Перерасход на закупку материалов составил 12%",
                DeviationStatus::Warning,
            )],
            coordinates: Coordinates { x: 60.0, y: 30.0 },
        },
        Enterprise {
            id: 3,
            name: "Екатеринбургский завод".to_string(),
            region: "Свердловская область".to_string(),
            employees: 1534,
            repair_stats: RepairStats { completed: 102, pending: 15, overdue: 2 },
            deviations: vec![deviation(
                4,
                "Нарушение технологии",
                date(2025, 10, 25),
                "Козлов К.К.",
                "Выявлено отклонение от технологического процесса в цехе №7",
                DeviationStatus::Critical,
            )],
            coordinates: Coordinates { x: 57.0, y: 61.0 },
        },
        Enterprise {
            id: 4,
            name: "Новосибирский завод".to_string(),
            region: "Новосибирская область".to_string(),
            employees: 678,
            repair_stats: RepairStats { completed: 45, pending: 6, overdue: 0 },
            deviations: vec![],
            coordinates: Coordinates { x: 55.0, y: 83.0 },
        },
    ]
}
