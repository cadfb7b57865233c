// View sync - Keeps every wired display consistent with the selected parameter
use crate::application::dashboard_service::DashboardService;
use crate::application::renderer::DashboardRenderer;
use crate::domain::dashboard::Dashboard;
use crate::domain::error::DashboardError;
use crate::domain::reading::Parameter;
use crate::infrastructure::config::ViewConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    ParameterSelector,
    Trend,
    Trajectories,
    Comparative,
    Stats,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::ParameterSelector,
        Feature::Trend,
        Feature::Trajectories,
        Feature::Comparative,
        Feature::Stats,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::ParameterSelector => "parameter selector",
            Feature::Trend => "trend chart",
            Feature::Trajectories => "trajectory chart",
            Feature::Comparative => "comparative chart",
            Feature::Stats => "stats bar",
        }
    }

    pub fn required_handles(&self) -> &'static [&'static str] {
        match self {
            Feature::ParameterSelector => &["parameter_selector"],
            Feature::Trend => &["trend_chart"],
            Feature::Trajectories => &["trajectory_chart"],
            Feature::Comparative => &["comparative_chart", "comparative_message"],
            Feature::Stats => &["stats_panel"],
        }
    }
}

/// Handles resolved for the features that passed validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WiredViews {
    pub selector: Option<String>,
    pub trend: Option<String>,
    pub trajectories: Option<String>,
    pub comparative: Option<(String, String)>,
    pub stats: Option<String>,
}

impl WiredViews {
    /// Resolve every feature's handles. A feature with any missing handle
    /// is left unwired and reported as a `MissingView` error.
    pub fn resolve(views: &ViewConfig) -> (Self, Vec<DashboardError>) {
        let mut wired = WiredViews::default();
        let mut errors = Vec::new();

        for feature in Feature::ALL {
            let mut handles = Vec::with_capacity(feature.required_handles().len());
            let mut missing = None;
            for name in feature.required_handles() {
                match views.handle(name) {
                    Some(handle) => handles.push(handle.to_string()),
                    None => {
                        missing = Some(*name);
                        break;
                    }
                }
            }

            if let Some(handle) = missing {
                errors.push(DashboardError::MissingView {
                    feature: feature.name(),
                    handle,
                });
                continue;
            }

            let mut handles = handles.into_iter();
            match feature {
                Feature::ParameterSelector => wired.selector = handles.next(),
                Feature::Trend => wired.trend = handles.next(),
                Feature::Trajectories => wired.trajectories = handles.next(),
                Feature::Comparative => {
                    wired.comparative = handles.next().zip(handles.next());
                }
                Feature::Stats => wired.stats = handles.next(),
            }
        }

        (wired, errors)
    }

    pub fn is_wired(&self, feature: Feature) -> bool {
        match feature {
            Feature::ParameterSelector => self.selector.is_some(),
            Feature::Trend => self.trend.is_some(),
            Feature::Trajectories => self.trajectories.is_some(),
            Feature::Comparative => self.comparative.is_some(),
            Feature::Stats => self.stats.is_some(),
        }
    }
}

pub struct ViewSync<R: DashboardRenderer> {
    service: DashboardService,
    renderer: R,
    views: WiredViews,
    current: Dashboard,
}

impl<R: DashboardRenderer> ViewSync<R> {
    /// Validate the display handles and bind the service to the renderer.
    /// Features whose handles are missing are logged and skipped; the rest
    /// are wired normally.
    pub fn wire(service: DashboardService, renderer: R, views: &ViewConfig) -> Self {
        let (views, errors) = WiredViews::resolve(views);
        for error in &errors {
            tracing::error!("{}", error);
        }

        let current = service.build_dashboard();
        Self {
            service,
            renderer,
            views,
            current,
        }
    }

    pub fn is_wired(&self, feature: Feature) -> bool {
        self.views.is_wired(feature)
    }

    pub fn views(&self) -> &WiredViews {
        &self.views
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.current
    }

    pub fn service(&self) -> &DashboardService {
        &self.service
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Push the current dashboard to every wired view.
    pub fn render_all(&mut self) -> Result<(), DashboardError> {
        let dashboard = &self.current;

        if let Some(target) = &self.views.trend {
            self.renderer.render_trend(target, &dashboard.trend)?;
        }
        if let Some(target) = &self.views.trajectories {
            self.renderer
                .render_trajectories(target, &dashboard.trajectories)?;
        }
        if let Some((chart, message)) = &self.views.comparative {
            self.renderer
                .render_comparative(chart, message, &dashboard.comparative)?;
        }
        if let Some(target) = &self.views.stats {
            self.renderer.render_stats(target, &dashboard.stats)?;
        }

        Ok(())
    }

    /// Handle a value coming from the parameter selector.
    pub fn on_parameter_change(&mut self, value: &str) -> Result<&Dashboard, DashboardError> {
        if self.views.selector.is_none() {
            return Err(DashboardError::MissingView {
                feature: Feature::ParameterSelector.name(),
                handle: "parameter_selector",
            });
        }
        let parameter: Parameter = value.parse()?;
        self.select(parameter)
    }

    pub fn select(&mut self, parameter: Parameter) -> Result<&Dashboard, DashboardError> {
        self.current = self.service.select_parameter(parameter);
        self.render_all()?;
        Ok(&self.current)
    }
}
