//! Survey datasets served by the facade until a real data source exists.

use chrono::NaiveDate;
use contracts::dashboards::feedback::*;
use once_cell::sync::Lazy;

pub const OVERALL_PARTICIPATION_RATE: f64 = 60.0;
pub const TOTAL_RESPONSES: u32 = 78;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub static PARTICIPATION: Lazy<Vec<ParticipationData>> = Lazy::new(|| {
    [
        ("Recursos Humanos", 45, 50, 90.0),
        ("Ventas", 78, 85, 91.8),
        ("Marketing", 32, 40, 80.0),
        ("IT", 67, 70, 95.7),
        ("Finanzas", 28, 30, 93.3),
    ]
    .into_iter()
    .map(|(department, responses, surveyed, participation_rate)| ParticipationData {
        department: department.to_string(),
        responses,
        surveyed,
        participation_rate,
    })
    .collect()
});

pub static OVERALL_PARTICIPATION_CHART: Lazy<Vec<OverallParticipationSlice>> = Lazy::new(|| {
    vec![
        OverallParticipationSlice {
            name: "Participado".to_string(),
            value: OVERALL_PARTICIPATION_RATE,
            color: "#388E3C".to_string(),
        },
        OverallParticipationSlice {
            name: "No participado".to_string(),
            value: 100.0 - OVERALL_PARTICIPATION_RATE,
            color: "#8BC34A".to_string(),
        },
    ]
});

pub static DEPARTMENT_PARTICIPATION_CHART: Lazy<Vec<DepartmentParticipation>> = Lazy::new(|| {
    [
        ("Asesoría Jurídica / Asistente de Dirección", 15.0),
        ("COMEX", 10.0),
        ("Dirección Editorial de Productos y Servicios Educativos", 20.0),
        ("Dirección de Estrategia y Desarrollo de Negocio", 25.0),
        ("Dirección de Operaciones", 30.0),
        ("Dirección de Personas y Gestión SSGG", 35.0),
        ("Dirección de Tecnología", 40.0),
        ("Dirección Edición General", 45.0),
        ("Dirección Gestión Económica-Financiera", 50.0),
        ("Dirección Ventas", 55.0),
    ]
    .into_iter()
    .map(|(department, participation)| DepartmentParticipation {
        department: department.to_string(),
        participation,
        non_participation: 100.0 - participation,
    })
    .collect()
});

pub static KPI: Lazy<KpiData> = Lazy::new(|| KpiData {
    enps: 42.0,
    satisfaction: 7.8,
    engagement: 8.2,
    evolution: 5.3,
});

pub static QUESTIONS: Lazy<Vec<QuestionData>> = Lazy::new(|| {
    vec![
        QuestionData {
            id: "q1".to_string(),
            question: "¿Qué tan satisfecho estás con tu trabajo actual?".to_string(),
            average: 7.5,
            distribution: vec![2, 5, 8, 15, 25, 30, 15],
            trend: Trend::Up,
        },
        QuestionData {
            id: "q2".to_string(),
            question: "¿Recomendarías tu empresa como un buen lugar para trabajar?".to_string(),
            average: 8.1,
            distribution: vec![1, 3, 5, 12, 20, 35, 24],
            trend: Trend::Stable,
        },
        QuestionData {
            id: "q3".to_string(),
            question: "¿Sientes que tu trabajo es valorado por tu supervisor?".to_string(),
            average: 6.9,
            distribution: vec![5, 8, 12, 18, 22, 25, 10],
            trend: Trend::Down,
        },
    ]
});

pub static REPORTS: Lazy<Vec<ReportData>> = Lazy::new(|| {
    let report = |id: &str,
                  title: &str,
                  format: ReportFormat,
                  upload_date: NaiveDate,
                  is_new: bool,
                  category: &str,
                  sub_category: Option<&str>| ReportData {
        id: id.to_string(),
        title: title.to_string(),
        format,
        upload_date,
        is_new,
        category: category.to_string(),
        sub_category: sub_category.map(str::to_string),
    };
    vec![
        report("r1", "Informe de Clima Laboral Q4 2024", ReportFormat::Pdf, date(2024, 12, 15), true, "Informes", Some("Comparativa anual")),
        report("r2", "Análisis de Engagement por Departamento", ReportFormat::Excel, date(2024, 12, 10), true, "Análisis", Some("Análisis de KPI")),
        report("r3", "Resultados eNPS Noviembre 2024", ReportFormat::Pdf, date(2024, 11, 30), false, "Informes", Some("Evolución temporal")),
        report("r4", "Documento de Políticas de RRHH", ReportFormat::Pdf, date(2024, 11, 20), false, "Documentos", None),
        report("r5", "Nóminas Diciembre 2024", ReportFormat::Excel, date(2024, 12, 28), true, "Nóminas", None),
        report("r6", "Guía de Onboarding RRHH", ReportFormat::Pdf, date(2024, 10, 1), false, "RRHH", None),
        report("r7", "Alerta Automática de Bajas", ReportFormat::Pdf, date(2025, 1, 5), true, "Análisis", Some("Alertas automáticas")),
    ]
});

pub static BEST_PRACTICES: Lazy<Vec<BestPractice>> = Lazy::new(|| {
    [
        (
            "bp1",
            "Guía Completa para Mejorar el Engagement Laboral",
            "Descubre estrategias probadas para aumentar la motivación y el compromiso de tus empleados.",
            "https://www.ejemplo.com/guia-engagement",
        ),
        (
            "bp2",
            "Liderazgo Transformacional: Claves para Inspirar a tu Equipo",
            "Aprende cómo un estilo de liderazgo transformacional puede impulsar el rendimiento y la innovación.",
            "https://www.ejemplo.com/liderazgo-transformacional",
        ),
        (
            "bp3",
            "Cómo Fomentar una Cultura de Feedback Positivo",
            "Consejos prácticos para implementar una cultura de retroalimentación constructiva en tu organización.",
            "https://www.ejemplo.com/cultura-feedback",
        ),
        (
            "bp4",
            "Bienestar Emocional en el Trabajo: Estrategias para RRHH",
            "Explora iniciativas para apoyar la salud mental y el bienestar de tus colaboradores.",
            "https://www.ejemplo.com/bienestar-emocional",
        ),
        (
            "bp5",
            "Optimización de Procesos de Onboarding para Nuevos Talentos",
            "Mejora la experiencia de incorporación de nuevos empleados para asegurar su éxito desde el primer día.",
            "https://www.ejemplo.com/onboarding-optimizacion",
        ),
    ]
    .into_iter()
    .map(|(id, title, description, url)| BestPractice {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
    })
    .collect()
});

pub static PARTICIPATION_OVERVIEW: Lazy<ParticipationOverview> =
    Lazy::new(|| ParticipationOverview {
        participants: 262,
        total_employees: 370,
        participant_percentage: 70.81,
        employee_percentage: 29.19,
    });

pub static INDICATOR_RESULTS: Lazy<Vec<IndicatorResult>> = Lazy::new(|| {
    [
        ("Alineamiento estratégico", 75.0),
        ("Compromiso", 76.0),
        ("Sostenibilidad", 81.0),
        ("Fidelidad", 78.0),
        ("Dirección de personas", 70.0),
        ("Ética laboral", 80.0),
        ("Desempeño", 62.0),
        ("Autonomía", 83.0),
        ("Onboarding", 80.0),
        ("Aprendizaje & Desarrollo profesional", 72.0),
        ("Igualdad de oportunidades", 65.0),
        ("Calidad", 87.0),
        ("Colaboración organizativa", 83.0),
        ("Comunicación interna", 63.0),
        ("Dinámica organizativa", 76.0),
        ("Mejora continua", 71.0),
        ("Instalaciones & Seguridad", 75.0),
        ("Compensación & beneficios", 48.0),
        ("Conciliación vida profesional y personal", 56.0),
        ("Bienestar", 76.0),
    ]
    .into_iter()
    .map(|(name, value)| IndicatorResult {
        name: name.to_string(),
        value,
    })
    .collect()
});

pub static SATISFACTION_INDEX: Lazy<SatisfactionIndex> =
    Lazy::new(|| SatisfactionIndex { value: 73.0 });

pub static BACKOFFICE_SUMMARY: Lazy<BackofficeSummary> = Lazy::new(|| BackofficeSummary {
    active_clients: 15,
    reports_last_week: 7,
    system_alerts: 2,
    recent_activity: vec![
        "[2025-07-13 10:30] Admin 'john.doe' subió 'Informe Anual 2024' para Cliente A.".to_string(),
        "[2025-07-13 09:15] Usuario 'hr_manager@clientb.com' inició sesión.".to_string(),
        "[2025-07-12 17:00] Cliente C activado.".to_string(),
    ],
});
