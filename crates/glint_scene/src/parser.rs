//! Scene description (`.scene`) parser.
//!
//! Line-oriented text format, one command per line:
//!
//! ```text
//! # comment
//! size 640 480
//! output spheres.png
//! camera 0 0 4  0 0 0  0 1 0  45
//! ambient 0.1 0.1 0.1
//! diffuse 0.8 0.2 0.2
//! specular 0.5 0.5 0.5
//! shininess 32
//! point 2 3 4  0.8 0.8 0.8
//! sphere 0 0 0 1
//! maxverts 3
//! vertex -1 -1 -1
//! vertex 1 -1 -1
//! vertex 0 1 -1
//! tri 0 1 2
//! plane 0 -1 0  0 1 0
//! ```
//!
//! Material commands (`diffuse`, `specular`, `shininess`) change the
//! current material, which is applied to every shape declared after them.

use glint_math::{Color, Direction, Point};
use glint_renderer::{Camera, Light, Material, Plane, Scene, Sphere, Triangle};
use thiserror::Error;

/// Slack allowed on the "sum must not exceed 1" color checks.
const COLOR_SUM_TOLERANCE: f64 = 1e-9;

/// Errors that can occur while parsing a scene description.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Missing required `size` command")]
    MissingSize,

    #[error("Missing required `camera` command")]
    MissingCamera,
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result of a single command; the message is attached to a line number
/// by the caller.
type CommandResult = Result<(), String>;

/// Stateful scene description parser.
pub struct SceneParser {
    scene: Scene,
    has_size: bool,
    material: Material,
    vertices: Vec<Point>,
    max_vertices: usize,
    light_total: Color,
}

impl Default for SceneParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneParser {
    /// Create a parser with an empty scene and a black, matte current material.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            has_size: false,
            material: Material::default(),
            vertices: Vec::new(),
            max_vertices: 0,
            light_total: Color::BLACK,
        }
    }

    /// Parse a complete scene description.
    pub fn parse(mut self, content: &str) -> ParseResult<Scene> {
        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            log::trace!("line {}: {}", index + 1, line);
            self.parse_line(line).map_err(|message| ParseError::Parse {
                line: index + 1,
                message,
            })?;
        }

        self.finish()
    }

    fn finish(self) -> ParseResult<Scene> {
        if !self.has_size {
            return Err(ParseError::MissingSize);
        }
        if self.scene.camera.is_none() {
            return Err(ParseError::MissingCamera);
        }

        log::info!(
            "Parsed scene: {}x{}, {} shapes, {} lights, output '{}'",
            self.scene.width,
            self.scene.height,
            self.scene.shapes.len(),
            self.scene.lights.len(),
            self.scene.output
        );
        Ok(self.scene)
    }

    fn parse_line(&mut self, line: &str) -> CommandResult {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(());
        };
        let args: Vec<&str> = tokens.collect();

        match command {
            "size" => self.parse_size(&args),
            "output" => self.parse_output(&args),
            "camera" => self.parse_camera(&args),
            "ambient" => self.parse_ambient(&args),
            "diffuse" => self.parse_diffuse(&args),
            "specular" => self.parse_specular(&args),
            "shininess" => self.parse_shininess(&args),
            "directional" => self.parse_directional(&args),
            "point" => self.parse_point(&args),
            "sphere" => self.parse_sphere(&args),
            "maxverts" => self.parse_maxverts(&args),
            "vertex" => self.parse_vertex(&args),
            "tri" => self.parse_tri(&args),
            "plane" => self.parse_plane(&args),
            other => Err(format!("unknown command '{other}'")),
        }
    }

    // Scene settings

    fn parse_size(&mut self, args: &[&str]) -> CommandResult {
        let [width, height] = integers::<2>("size", args)?;
        if width <= 0 || height <= 0 {
            return Err(format!("size must be positive, got {width}x{height}"));
        }
        let to_u32 = |v: i64| u32::try_from(v).map_err(|_| format!("size {v} is too large"));

        self.scene.width = to_u32(width)?;
        self.scene.height = to_u32(height)?;
        self.has_size = true;
        Ok(())
    }

    fn parse_output(&mut self, args: &[&str]) -> CommandResult {
        let [name] = expect_args::<1>("output", args)?;
        self.scene.output = name.to_string();
        Ok(())
    }

    fn parse_camera(&mut self, args: &[&str]) -> CommandResult {
        let [fx, fy, fz, ax, ay, az, ux, uy, uz, fov] = reals::<10>("camera", args)?;
        let camera = Camera::new(
            Point::new(fx, fy, fz),
            Point::new(ax, ay, az),
            Direction::new(ux, uy, uz),
            fov,
        );
        log::debug!("camera {:?}", camera);
        self.scene.camera = Some(camera);
        Ok(())
    }

    // Materials

    fn parse_ambient(&mut self, args: &[&str]) -> CommandResult {
        let ambient = color("ambient", args)?;
        check_sum_at_most_one(ambient + self.material.diffuse, "ambient + diffuse")?;
        self.scene.ambient = ambient;
        Ok(())
    }

    fn parse_diffuse(&mut self, args: &[&str]) -> CommandResult {
        let diffuse = color("diffuse", args)?;
        check_sum_at_most_one(self.scene.ambient + diffuse, "ambient + diffuse")?;
        self.material.diffuse = diffuse;
        Ok(())
    }

    fn parse_specular(&mut self, args: &[&str]) -> CommandResult {
        self.material.specular = color("specular", args)?;
        Ok(())
    }

    fn parse_shininess(&mut self, args: &[&str]) -> CommandResult {
        let [shininess] = reals::<1>("shininess", args)?;
        self.material.shininess = shininess;
        Ok(())
    }

    // Lights

    fn parse_directional(&mut self, args: &[&str]) -> CommandResult {
        let [dx, dy, dz, r, g, b] = reals::<6>("directional", args)?;
        let color = self.accept_light_color(Color::new(r, g, b))?;
        self.scene
            .add_light(Light::directional(Direction::new(dx, dy, dz), color));
        Ok(())
    }

    fn parse_point(&mut self, args: &[&str]) -> CommandResult {
        let [x, y, z, r, g, b] = reals::<6>("point", args)?;
        let color = self.accept_light_color(Color::new(r, g, b))?;
        self.scene.add_light(Light::point(Point::new(x, y, z), color));
        Ok(())
    }

    /// Light colors must lie in [0, 1] and their running sum must not
    /// exceed 1 in any channel.
    fn accept_light_color(&mut self, color: Color) -> Result<Color, String> {
        let channels = [color.r(), color.g(), color.b()];
        if channels.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(format!("light color {color} must be within [0, 1]"));
        }

        let total = self.light_total + color;
        check_sum_at_most_one(total, "sum of light colors")?;
        self.light_total = total;
        Ok(color)
    }

    // Geometry

    fn parse_sphere(&mut self, args: &[&str]) -> CommandResult {
        let [x, y, z, radius] = reals::<4>("sphere", args)?;
        if radius <= 0.0 {
            return Err(format!("sphere radius must be positive, got {radius}"));
        }
        self.scene
            .add_shape(Sphere::new(Point::new(x, y, z), radius, self.material));
        Ok(())
    }

    fn parse_maxverts(&mut self, args: &[&str]) -> CommandResult {
        let [max] = integers::<1>("maxverts", args)?;
        if max <= 0 {
            return Err(format!("maxverts must be positive, got {max}"));
        }
        self.max_vertices = max as usize;
        self.vertices.clear();
        Ok(())
    }

    fn parse_vertex(&mut self, args: &[&str]) -> CommandResult {
        let [x, y, z] = reals::<3>("vertex", args)?;
        if self.vertices.len() >= self.max_vertices {
            return Err(format!(
                "too many vertices: maxverts is {}",
                self.max_vertices
            ));
        }
        self.vertices.push(Point::new(x, y, z));
        Ok(())
    }

    fn parse_tri(&mut self, args: &[&str]) -> CommandResult {
        let indices = integers::<3>("tri", args)?;
        let mut corners = [Point::ZERO; 3];
        for (corner, index) in corners.iter_mut().zip(indices) {
            *corner = usize::try_from(index)
                .ok()
                .and_then(|i| self.vertices.get(i).copied())
                .ok_or_else(|| {
                    format!(
                        "vertex index {index} out of range (0..{})",
                        self.vertices.len()
                    )
                })?;
        }

        let [a, b, c] = corners;
        self.scene.add_shape(Triangle::new(a, b, c, self.material));
        Ok(())
    }

    fn parse_plane(&mut self, args: &[&str]) -> CommandResult {
        let [px, py, pz, nx, ny, nz] = reals::<6>("plane", args)?;
        self.scene.add_shape(Plane::new(
            Point::new(px, py, pz),
            Direction::new(nx, ny, nz),
            self.material,
        ));
        Ok(())
    }
}

/// Parse a scene description from a string.
pub fn parse_scene(content: &str) -> ParseResult<Scene> {
    SceneParser::new().parse(content)
}

fn expect_args<'a, const N: usize>(command: &str, args: &[&'a str]) -> Result<[&'a str; N], String> {
    <[&str; N]>::try_from(args)
        .map_err(|_| format!("{command} expects {N} arguments, got {}", args.len()))
}

fn reals<const N: usize>(command: &str, args: &[&str]) -> Result<[f64; N], String> {
    let tokens = expect_args::<N>(command, args)?;
    let mut values = [0.0; N];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = token
            .parse()
            .map_err(|_| format!("{command}: invalid number '{token}'"))?;
    }
    Ok(values)
}

fn integers<const N: usize>(command: &str, args: &[&str]) -> Result<[i64; N], String> {
    let tokens = expect_args::<N>(command, args)?;
    let mut values = [0; N];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = token
            .parse()
            .map_err(|_| format!("{command}: invalid integer '{token}'"))?;
    }
    Ok(values)
}

fn color(command: &str, args: &[&str]) -> Result<Color, String> {
    let [r, g, b] = reals::<3>(command, args)?;
    Ok(Color::new(r, g, b))
}

fn check_sum_at_most_one(sum: Color, what: &str) -> CommandResult {
    let limit = 1.0 + COLOR_SUM_TOLERANCE;
    if sum.r() > limit || sum.g() > limit || sum.b() > limit {
        return Err(format!("{what} must not exceed 1 per channel, got {sum}"));
    }
    Ok(())
}
