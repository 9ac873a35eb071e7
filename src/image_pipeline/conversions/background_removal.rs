use tracing::{debug, info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    bitmap::Bitmap,
    common::error::{PipelineError, Result},
    conversions::timing::{PipelineTimings, Timer},
    filter::{crop_to_content, remove_background_in_place, resize},
    output::{BitmapWriter, FormatWriter, PipelineConfig},
    source::ImageSource,
};

/// Acquire an image, strip its gray background, optionally crop and upscale
/// it, then encode it.
pub struct BackgroundRemovalPipeline<S: ImageSource, W: BitmapWriter> {
    source: S,
    writer: W,
    config: PipelineConfig,
}

impl<S: ImageSource> BackgroundRemovalPipeline<S, FormatWriter> {
    pub fn new(source: S, config: PipelineConfig) -> Self {
        Self {
            source,
            writer: FormatWriter,
            config,
        }
    }
}

impl<S: ImageSource, W: BitmapWriter> BackgroundRemovalPipeline<S, W> {
    pub fn with_custom(source: S, writer: W, config: PipelineConfig) -> Self {
        Self {
            source,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Runs every step up to, but not including, encoding.
    ///
    /// The result may be empty when cropping is on and nothing survives the
    /// filter.
    pub fn process(&self) -> Result<Bitmap> {
        self.process_timed().map(|(bitmap, _)| bitmap)
    }

    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub fn process_timed(&self) -> Result<(Bitmap, PipelineTimings)> {
        let mut timings = PipelineTimings::new();

        let mut bitmap = {
            let _span = tracing::info_span!("acquire").entered();
            let timer = Timer::start("acquire");
            let bitmap = self.source.acquire()?;
            timings.record(timer);
            bitmap
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = bitmap.width(),
                height = bitmap.height()
            ).entered();
            self.validate_dimensions(bitmap.width(), bitmap.height())?;
        }

        {
            let _span = tracing::info_span!("remove_background").entered();
            let timer = Timer::start("remove_background");
            remove_background_in_place(&mut bitmap, &self.config.filter);
            timings.record(timer);
        }

        if self.config.crop {
            let _span = tracing::info_span!("crop").entered();
            let timer = Timer::start("crop");
            bitmap = crop_to_content(&bitmap);
            timings.record(timer);
            if bitmap.is_empty() {
                info!("No foreground pixels left after background removal");
            }
        }

        if self.config.resize_factor != 1 {
            let _span = tracing::info_span!("resize",
                factor = self.config.resize_factor,
                resampling = ?self.config.resampling
            ).entered();
            let timer = Timer::start("resize");
            bitmap = resize(&bitmap, self.config.resize_factor, self.config.resampling)?;
            timings.record(timer);
        }

        debug!(width = bitmap.width(), height = bitmap.height(), "Processing complete");
        Ok((bitmap, timings))
    }

    /// Processes the image and encodes it to `output`, returning the bitmap
    /// that was written.
    #[instrument(skip(self, output))]
    pub fn convert(&self, output: &mut dyn Write) -> Result<Bitmap> {
        info!("Starting background removal");

        let bitmap = self.process()?;

        {
            let _span = tracing::info_span!("encode", format = ?self.config.format).entered();
            self.writer.write_bitmap(&bitmap, output, &self.config)?;
        }

        info!(
            width = bitmap.width(),
            height = bitmap.height(),
            "Conversion complete"
        );
        Ok(bitmap)
    }

    #[instrument(skip(self, output_path))]
    pub fn convert_to_file<P: AsRef<Path>>(&self, output_path: P) -> Result<Bitmap> {
        let output_path = output_path.as_ref();

        info!(
            source = %self.source.describe(),
            output = %output_path.display(),
            "Converting"
        );

        let bitmap = self.process()?;
        self.write_to_file(&bitmap, output_path)?;

        Ok(bitmap)
    }

    /// Encodes an already processed bitmap and writes it to `output_path`.
    ///
    /// Encoding happens in memory first so a failed encode leaves no file behind.
    pub fn write_to_file<P: AsRef<Path>>(&self, bitmap: &Bitmap, output_path: P) -> Result<()> {
        let output_path = output_path.as_ref();

        let mut encoded = Vec::new();
        {
            let _span = tracing::info_span!("encode", format = ?self.config.format).entered();
            self.writer.write_bitmap(bitmap, &mut encoded, &self.config)?;
        }

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                PipelineError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
