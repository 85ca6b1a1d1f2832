//! The data table component and its render lifecycle.

use crate::collaborators::{Dimension, Surface, TableRenderer};
use crate::config::TableConfig;
use crate::error::DataTableError;
use crate::transform;

/// Lifecycle capability a dashboard shell drives.
///
/// `render` is invoked once when the component first attaches to its
/// surface; `redraw` on every upstream filter change afterwards. For the
/// data table the two are the same operation — each repaint is a
/// from-scratch rebuild, never an incremental update.
pub trait Attachable {
    fn render(&mut self) -> Result<(), DataTableError>;
    fn redraw(&mut self) -> Result<(), DataTableError>;
}

/// Builder for [`DataTable`].
///
/// The dimension and the surface are mandatory attributes; finalizing
/// without either fails here, at construction time, rather than surfacing
/// later as a render-time crash.
pub struct DataTableBuilder<D, S> {
    config: TableConfig,
    dimension: Option<D>,
    surface: Option<S>,
}

impl<D, S> Default for DataTableBuilder<D, S> {
    fn default() -> Self {
        Self {
            config: TableConfig::default(),
            dimension: None,
            surface: None,
        }
    }
}

impl<D, S> DataTableBuilder<D, S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies the dimension the table draws its records from.
    pub fn dimension(mut self, dimension: D) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Supplies the surface the table is painted into.
    pub fn surface(mut self, surface: S) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Seeds the initial display options; defaults apply otherwise.
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the mandatory attributes and constructs the component.
    ///
    /// # Errors
    ///
    /// [`DataTableError::MissingDimension`] or
    /// [`DataTableError::MissingSurface`] when the corresponding
    /// collaborator was never supplied.
    pub fn build<R>(self) -> Result<DataTable<D, S, R>, DataTableError>
    where
        D: Dimension,
        S: Surface,
        R: TableRenderer<S::Table>,
    {
        let dimension = self.dimension.ok_or(DataTableError::MissingDimension)?;
        let surface = self.surface.ok_or(DataTableError::MissingSurface)?;
        Ok(DataTable {
            config: self.config,
            dimension,
            surface,
            renderer: None,
        })
    }
}

/// Row-level data view that stays synchronized with cross-filtering.
///
/// Holds the display options, the dimension it reads from, the surface it
/// paints into, and the widget instance mounted by the most recent
/// render. Each render exclusively owns the table element and renderer it
/// creates; the previous render's are discarded before the new ones
/// exist.
pub struct DataTable<D, S, R> {
    config: TableConfig,
    dimension: D,
    surface: S,
    renderer: Option<R>,
}

impl<D, S, R> DataTable<D, S, R>
where
    D: Dimension,
    S: Surface,
    R: TableRenderer<S::Table>,
{
    pub fn builder() -> DataTableBuilder<D, S> {
        DataTableBuilder::new()
    }

    /// Current display options.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Mutable display options for chained configuration calls. Changes
    /// take effect on the next repaint.
    pub fn config_mut(&mut self) -> &mut TableConfig {
        &mut self.config
    }

    /// The dimension this table reads from.
    pub fn dimension(&self) -> &D {
        &self.dimension
    }

    /// The surface this table paints into.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Widget instance mounted by the most recent render, if any.
    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    // Setters that trigger an immediate redraw.
    //
    // Every other display option is a pure mutation on `config_mut()`;
    // scrolling alone repaints as part of the set. Keep it that way: new
    // toggles belong on `TableConfig` unless their change genuinely
    // cannot wait for the next upstream redraw.

    /// Stores the scrolling flag, then repaints immediately.
    pub fn set_scrolling_enabled(&mut self, enable: bool) -> Result<&mut Self, DataTableError> {
        self.config.set_scrolling_enabled(enable);
        self.render_into_surface()?;
        Ok(self)
    }

    /// Performs a full repaint.
    ///
    /// Tears the surface down child by child, attaches a fresh table
    /// element, runs the record slice through the transform, and mounts a
    /// new renderer instance with the assembled options. Returns the
    /// component for chaining.
    ///
    /// # Errors
    ///
    /// [`DataTableError::EmptyDataset`] when the dimension's filtered
    /// slice is empty. The surface has already been cleared and the empty
    /// table element attached by then; no renderer is mounted.
    pub fn render(&mut self) -> Result<&mut Self, DataTableError> {
        self.render_into_surface()?;
        Ok(self)
    }

    /// A redraw is defined identically to a full render.
    pub fn redraw(&mut self) -> Result<&mut Self, DataTableError> {
        self.render()
    }

    fn render_into_surface(&mut self) -> Result<(), DataTableError> {
        self.renderer = None;
        while self.surface.remove_last_child() {}
        let table = self.surface.append_table();

        let records = transform::fetch_records(&self.dimension, self.config.order());
        tracing::debug!(
            records = records.len(),
            order = ?self.config.order(),
            "rebuilding table"
        );
        let payload = transform::payload_from_records(&records, self.config.header_labels())?;
        let options = transform::widget_options(&self.config, payload);

        self.renderer = Some(R::mount(table, options));
        Ok(())
    }
}

impl<D, S, R> Attachable for DataTable<D, S, R>
where
    D: Dimension,
    S: Surface,
    R: TableRenderer<S::Table>,
{
    fn render(&mut self) -> Result<(), DataTableError> {
        self.render_into_surface()
    }

    fn redraw(&mut self) -> Result<(), DataTableError> {
        self.render_into_surface()
    }
}
