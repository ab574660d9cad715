use super::{ObjectId, SceneObject};

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    object: Option<SceneObject>,
}

/// Owned collection of scene objects addressed by [`ObjectId`].
///
/// Performance characteristics:
/// - `add()` is O(1) amortized and reuses freed slots
/// - `get()` / `get_mut()` / `remove()` are O(1)
/// - iteration visits live objects in slot order
#[derive(Debug, Clone, Default)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an object and returns its id.
    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        self.len += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.object = Some(object);
            return ObjectId::new(index, slot.generation);
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 0, object: Some(object) });
        ObjectId::new(index, 0)
    }

    /// Removes and returns the object, or `None` if the id is stale.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let object = slot.object.take()?;

        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(object)
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.object.as_ref()
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.object.as_mut()
    }

    #[inline]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live objects with their ids, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.object
                .as_ref()
                .map(|o| (ObjectId::new(i as u32, slot.generation), o))
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ObjectId, &mut SceneObject)> {
        self.slots.iter_mut().enumerate().filter_map(|(i, slot)| {
            let generation = slot.generation;
            slot.object
                .as_mut()
                .map(move |o| (ObjectId::new(i as u32, generation), o))
        })
    }

    /// First live object with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        self.iter().find(|(_, o)| o.name == name).map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::geometry::Geometry;
    use crate::scene::Material;

    fn cube(name: &str) -> SceneObject {
        SceneObject::new(name, Geometry::cuboid(1.0, 1.0, 1.0), Material::basic(0xff0000))
    }

    #[test]
    fn add_and_get() {
        let mut scene = Scene::new();
        let a = scene.add(cube("a"));
        let b = scene.add(cube("b"));
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.get(a).unwrap().name, "a");
        assert_eq!(scene.get(b).unwrap().name, "b");
    }

    #[test]
    fn get_mut_mutates_in_place() {
        let mut scene = Scene::new();
        let id = scene.add(cube("mesh"));
        scene.get_mut(id).unwrap().transform.position = Vec3::new(0.7, -0.6, 1.0);
        assert_eq!(scene.get(id).unwrap().transform.position, Vec3::new(0.7, -0.6, 1.0));
    }

    #[test]
    fn stale_id_does_not_alias_reused_slot() {
        let mut scene = Scene::new();
        let old = scene.add(cube("old"));
        assert!(scene.remove(old).is_some());

        let new = scene.add(cube("new"));
        assert_eq!(new.index(), old.index());
        assert!(scene.get(old).is_none());
        assert!(scene.remove(old).is_none());
        assert_eq!(scene.get(new).unwrap().name, "new");
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn iter_skips_removed() {
        let mut scene = Scene::new();
        let a = scene.add(cube("a"));
        scene.add(cube("b"));
        scene.remove(a);
        let names: Vec<_> = scene.iter().map(|(_, o)| o.name.as_str()).collect();
        assert_eq!(names, ["b"]);
    }

    #[test]
    fn find_by_name() {
        let mut scene = Scene::new();
        scene.add(cube("a"));
        let b = scene.add(cube("b"));
        assert_eq!(scene.find_by_name("b"), Some(b));
        assert_eq!(scene.find_by_name("zzz"), None);
    }
}
